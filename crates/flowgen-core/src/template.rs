/// Literal source text with `{{name}}` placeholders.
///
/// Rendering happens in a single pass: substituted values are emitted as-is
/// and never scanned for placeholders themselves. Unknown placeholders and an
/// unclosed `{{` are kept unchanged.
#[derive(Debug, Clone, Copy)]
pub struct SnippetTemplate {
    source: &'static str,
}

impl SnippetTemplate {
    pub const fn new(source: &'static str) -> Self {
        Self { source }
    }

    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let source = self.source.strip_suffix('\n').unwrap_or(self.source);
        let mut rendered = String::with_capacity(source.len());
        let mut rest = source;

        while let Some(start) = rest.find("{{") {
            rendered.push_str(&rest[..start]);
            let tail = &rest[start..];
            let Some(end) = tail.find("}}") else {
                rendered.push_str(tail);
                rest = "";
                break;
            };

            let token = &tail[..end + 2];
            let name = token[2..end].trim();
            match vars.iter().find(|(key, _)| *key == name) {
                Some((_, value)) => rendered.push_str(value),
                None => rendered.push_str(token),
            }
            rest = &tail[end + 2..];
        }

        rendered.push_str(rest);
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::SnippetTemplate;

    #[test]
    fn test_render_substitutes_named_values() {
        let template = SnippetTemplate::new("POST {{ base_url }}/execute -> {{payload}}");
        let rendered = template.render(&[("base_url", "https://a.b"), ("payload", "{}")]);
        assert_eq!(rendered, "POST https://a.b/execute -> {}");
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        let template = SnippetTemplate::new("{{payload}} at {{base_url}}");
        let rendered = template.render(&[("payload", "{{base_url}}"), ("base_url", "x")]);
        assert_eq!(rendered, "{{base_url}} at x");
    }

    #[test]
    fn test_render_keeps_unknown_and_unclosed() {
        let template = SnippetTemplate::new("{{known}} {{unknown}} {{open");
        let rendered = template.render(&[("known", "ok")]);
        assert_eq!(rendered, "ok {{unknown}} {{open");
    }

    #[test]
    fn test_render_leaves_single_braces() {
        let template = SnippetTemplate::new("headers: {'a': 1}, ${status}\n");
        assert_eq!(template.render(&[]), "headers: {'a': 1}, ${status}");
    }
}
