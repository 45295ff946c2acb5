use std::path::Path;

use stockroom::config::ConfigWarning;

use crate::ui::text::ColoredText;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], color: bool) {
    for w in warnings {
        tracing::warn!(key = %w.key, file = %path.display(), "unknown config key");

        let location = match w.line {
            Some(line) => format!("{}:{}", path.display(), line),
            None => path.display().to_string(),
        };
        let message = format!("⚠ Unknown config key '{}' in {}", w.key, location);
        eprintln!("{}", ColoredText::warning(message).render(color));

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
