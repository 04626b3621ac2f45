use axum::extract::State;
use axum::response::Html;
use axum::Json;
use chrono::Local;

use backend_application::queries::timeline_queries;
use backend_application::AppState;
use backend_domain::CallTimeline;

use crate::error::HttpError;

pub async fn list_reports(
    State(state): State<AppState>,
) -> Result<Json<Vec<CallTimeline>>, HttpError> {
    let timelines = timeline_queries::build_all_timelines(&state).await?;
    Ok(Json(timelines))
}

pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let timelines = timeline_queries::build_all_timelines(&state).await?;
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    Ok(Html(render_dashboard(&timelines, &generated)))
}

// Timeline fields are caller-supplied text, escape before interpolating.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn render_dashboard(timelines: &[CallTimeline], generated: &str) -> String {
    let mut rows = String::new();
    for timeline in timelines {
        let menus = timeline
            .menus
            .iter()
            .map(|entry| {
                format!(
                    "{} ({})",
                    escape_html(&entry.choice),
                    escape_html(&entry.timestamp)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        rows.push_str(&format!(
            "<tr>\
            <td class=\"call\">{call_id}</td>\
            <td>{start}</td>\
            <td>{caller}</td>\
            <td>{name}</td>\
            <td>{number}</td>\
            <td>{end}</td>\
            <td class=\"menus\">{menus}</td>\
            </tr>",
            call_id = escape_html(&timeline.call_id),
            start = escape_html(timeline.start.as_deref().unwrap_or("")),
            caller = escape_html(timeline.caller_address.as_deref().unwrap_or("")),
            name = escape_html(timeline.student_name.as_deref().unwrap_or("")),
            number = escape_html(timeline.matriculation_number.as_deref().unwrap_or("")),
            end = escape_html(timeline.end.as_deref().unwrap_or("")),
            menus = menus,
        ));
    }
    if timelines.is_empty() {
        rows.push_str("<tr><td colspan=\"7\" class=\"empty\">No calls recorded yet.</td></tr>");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>Voice Portal Call Reports</title>
<style>
:root {{
  --ink: #0f172a;
  --muted: #64748b;
  --border: #e2e8f0;
  --shadow: rgba(15, 23, 42, 0.14);
}}
* {{ box-sizing: border-box; }}
body {{
  margin: 0;
  font-family: "IBM Plex Sans", "Source Sans 3", sans-serif;
  background: radial-gradient(circle at top, #1e293b 0%, #0f172a 55%, #0b1220 100%);
  color: #e2e8f0;
}}
.page {{ max-width: 1100px; margin: 0 auto; padding: 32px 20px 48px; }}
.hero {{
  background: linear-gradient(135deg, rgba(37,99,235,0.18), rgba(15,23,42,0.95));
  border-radius: 20px;
  padding: 28px;
  box-shadow: 0 18px 40px rgba(15, 23, 42, 0.35);
}}
.hero h1 {{ margin: 0 0 6px; font-size: 28px; }}
.hero p {{ margin: 0; color: var(--muted); font-size: 14px; }}
.table-wrap {{
  margin-top: 22px;
  background: #ffffff;
  color: var(--ink);
  border-radius: 16px;
  overflow: hidden;
  box-shadow: 0 12px 28px var(--shadow);
}}
.table {{ width: 100%; border-collapse: collapse; font-size: 14px; }}
.table thead th {{
  text-align: left;
  font-size: 11px;
  letter-spacing: 0.12em;
  text-transform: uppercase;
  color: #64748b;
  background: #f1f5f9;
  padding: 12px 14px;
}}
.table tbody td {{
  padding: 12px 14px;
  border-bottom: 1px solid var(--border);
  vertical-align: middle;
}}
.table tbody tr:nth-child(even) {{ background: #f8fafc; }}
.table .call {{
  font-family: "IBM Plex Mono", "JetBrains Mono", "SFMono-Regular", monospace;
  font-size: 12px;
}}
.table .menus {{ color: #1f2937; font-size: 13px; }}
.table .empty {{ text-align: center; color: var(--muted); padding: 20px; }}
.footer {{ margin-top: 16px; color: var(--muted); font-size: 12px; }}
</style>
</head>
<body>
<div class="page">
  <section class="hero">
    <h1>Call Reports</h1>
    <p>{count} calls · generated {generated}</p>
  </section>
  <div class="table-wrap">
    <table class="table">
      <thead><tr>
        <th>Call</th>
        <th>Start</th>
        <th>Caller</th>
        <th>Student</th>
        <th>Matriculation</th>
        <th>End</th>
        <th>Menu choices</th>
      </tr></thead>
      <tbody>
      {rows}
      </tbody>
    </table>
  </div>
  <div class="footer">Menu choices are listed in the order the portal reported them.</div>
</div>
</body>
</html>"#,
        count = timelines.len(),
        generated = generated,
        rows = rows,
    )
}
