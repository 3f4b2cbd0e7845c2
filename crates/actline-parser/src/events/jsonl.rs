use super::types::Event;

pub fn encode_event_jsonl_line(event: &Event) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(event)?;
    line.push('\n');
    Ok(line)
}

pub fn decode_event_jsonl_line(line: &str) -> serde_json::Result<Event> {
    serde_json::from_str::<Event>(line.trim_end())
}

#[cfg(test)]
#[path = "jsonl_test.rs"]
mod tests;
