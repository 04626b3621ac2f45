use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartReport {
    #[serde(default, rename = "callId")]
    pub call_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub ani: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuReport {
    #[serde(default, rename = "callId")]
    pub call_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub choice: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndReport {
    #[serde(default, rename = "callId")]
    pub call_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentLookup {
    #[serde(default, rename = "callId")]
    pub call_id: Option<String>,
    #[serde(default, rename = "matrikelnummer")]
    pub matriculation_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseLookup {
    #[serde(default, rename = "callId")]
    pub call_id: Option<String>,
    #[serde(default, rename = "classId")]
    pub class_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub clickhouse_url: String,
    pub clickhouse_database: String,
    pub clickhouse_user: Option<String>,
    pub clickhouse_password: Option<String>,
}
