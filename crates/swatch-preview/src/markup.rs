//! Small HTML helpers shared by the previews.

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Join a base class with the modifiers whose flag is set.
pub fn classes(base: &str, modifiers: &[(&str, bool)]) -> String {
    let mut out = base.to_string();
    for (class, enabled) in modifiers {
        if *enabled {
            out.push(' ');
            out.push_str(class);
        }
    }
    out
}

/// A Material Symbols ligature icon.
pub fn icon(name: &str) -> String {
    format!(r#"<span class="sw-icon" aria-hidden="true">{}</span>"#, escape(name))
}

/// `checked`/`selected`-style boolean attribute.
pub fn flag(name: &str, on: bool) -> String {
    if on {
        format!(" {name}")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn joins_enabled_modifiers() {
        assert_eq!(
            classes("sw-chip", &[("is-selected", true), ("is-disabled", false)]),
            "sw-chip is-selected"
        );
        assert_eq!(flag("checked", true), " checked");
        assert_eq!(flag("checked", false), "");
    }
}
