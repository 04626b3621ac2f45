pub mod record_commands;
