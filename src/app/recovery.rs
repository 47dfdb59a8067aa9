#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("connection refused")
        || msg_lower.contains("error sending request")
        || msg_lower.contains("dns error")
    {
        suggestions.push("Check that the server URL is reachable".to_string());
    }

    if msg_lower.contains("401") || msg_lower.contains("unauthorized") {
        suggestions.push("Check the username and password for this server".to_string());
    }

    if msg_lower.contains("env var") {
        suggestions.push("Export the password variable named in config.toml".to_string());
    }

    if msg_lower.contains("not connected") {
        suggestions.push("Pick a server from the palette: Manage servers".to_string());
    }

    suggestions
}
