// Property File Parser
// Parses simple key=value property files

/// Parse property file text, invoking `handler` for each key-value pair.
///
/// Keys keep their case. Leading/trailing whitespace around keys and values
/// is trimmed, `#` starts a comment that runs to the end of the line (also
/// after a value), and lines without `=` are skipped with a warning.
///
/// # Arguments
/// * `data` - The property file content to parse
/// * `handler` - Callback invoked with `(key, value)` for each entry
pub fn parse_propfile(data: &str, handler: &mut dyn FnMut(&str, &str)) {
    for (lineno, raw) in data.lines().enumerate() {
        let line = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            log::warn!("Key without value on line {}: '{}'", lineno + 1, line);
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            log::warn!("Value without key on line {}", lineno + 1);
            continue;
        }

        handler(key, value);
    }
}
