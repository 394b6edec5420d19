// hero heading typing effect
//
// the heading markup is split at the highlighted name span; the prefix before it is replayed a
// character at a time (tags are copied whole so the markup never breaks) and then the name is
// revealed a character at a time inside the span

pub const NAME_SPAN_OPEN: &str = r#"<span class="highlight">"#;
pub const EMPTY_NAME_SPAN: &str = r#"<span class="highlight"></span>"#;

// the heading markup that precedes the name span, if the span is present
pub fn split_prefix(heading_html: &str) -> Option<&str> {
    heading_html
        .find(NAME_SPAN_OPEN)
        .map(|end| &heading_html[..end])
}

// heading markup with the given prefix followed by an empty name span
pub fn heading_with_prefix(prefix: &str) -> String {
    format!("{prefix}{EMPTY_NAME_SPAN}")
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypingStep {
    // the prefix typed so far; the heading is re-rendered from it
    Prefix(String),
    // the name typed so far; only the span contents change
    Name(String),
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    prefix: String,
    name: String,
    // byte cursors into prefix and name
    prefix_at: usize,
    name_at: usize,
}

impl Typewriter {
    pub fn new(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Typewriter {
            prefix: prefix.into(),
            name: name.into(),
            prefix_at: 0,
            name_at: 0,
        }
    }

    fn advance_prefix(&mut self) {
        let rest = &self.prefix[self.prefix_at..];

        let step = if rest.starts_with('<') {
            // an unterminated tag is copied through to the end
            rest.find('>').map_or(rest.len(), |end| end + 1)
        } else {
            rest.chars().next().map_or(0, char::len_utf8)
        };

        self.prefix_at += step;
    }

    fn advance_name(&mut self) {
        let rest = &self.name[self.name_at..];
        self.name_at += rest.chars().next().map_or(0, char::len_utf8);
    }
}

impl Iterator for Typewriter {
    type Item = TypingStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.prefix_at < self.prefix.len() {
            self.advance_prefix();
            return Some(TypingStep::Prefix(self.prefix[..self.prefix_at].to_owned()));
        }

        if self.name_at < self.name.len() {
            self.advance_name();
            return Some(TypingStep::Name(self.name[..self.name_at].to_owned()));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_name_span() {
        let html = r#"Hi, I'm <span class="highlight">Ada</span>"#;

        assert_eq!(split_prefix(html), Some("Hi, I'm "));
        assert_eq!(split_prefix("Hi, I'm Ada"), None);
        assert_eq!(heading_with_prefix("Hi"), r#"Hi<span class="highlight"></span>"#);
    }

    #[test]
    fn types_prefix_then_name() {
        let steps: Vec<_> = Typewriter::new("Hi ", "Al").collect();

        assert_eq!(
            steps,
            vec![
                TypingStep::Prefix("H".to_owned()),
                TypingStep::Prefix("Hi".to_owned()),
                TypingStep::Prefix("Hi ".to_owned()),
                TypingStep::Name("A".to_owned()),
                TypingStep::Name("Al".to_owned()),
            ]
        );
    }

    #[test]
    fn tags_are_copied_atomically() {
        let prefixes: Vec<_> = Typewriter::new("a<br>b", "")
            .map(|step| match step {
                TypingStep::Prefix(p) => p,
                TypingStep::Name(_) => panic!("empty name should not be typed"),
            })
            .collect();

        assert_eq!(prefixes, vec!["a", "a<br>", "a<br>b"]);
    }

    #[test]
    fn unterminated_tag_runs_to_end() {
        let steps: Vec<_> = Typewriter::new("x<em", "").collect();

        assert_eq!(
            steps,
            vec![
                TypingStep::Prefix("x".to_owned()),
                TypingStep::Prefix("x<em".to_owned()),
            ]
        );
    }

    #[test]
    fn multibyte_characters_are_single_steps() {
        let names: Vec<_> = Typewriter::new("", "Zoë").collect();

        assert_eq!(
            names,
            vec![
                TypingStep::Name("Z".to_owned()),
                TypingStep::Name("Zo".to_owned()),
                TypingStep::Name("Zoë".to_owned()),
            ]
        );
    }

    #[test]
    fn empty_heading_finishes_immediately() {
        assert_eq!(Typewriter::new("", "").next(), None);
    }
}
