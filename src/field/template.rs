use super::readonly::ReadonlyFieldConfiguration;

/// Turns a frozen field configuration into output markup.
///
/// Implementations only read the snapshot; the crate ships none of its own.
pub trait FieldTemplate {
    type Output;

    fn render(&self, field: &ReadonlyFieldConfiguration) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldConfiguration, Html};

    struct InlineTemplate;

    impl FieldTemplate for InlineTemplate {
        type Output = String;

        fn render(&self, field: &ReadonlyFieldConfiguration) -> String {
            let mut out = String::new();
            for fragment in field.prepended_html() {
                out.push_str(fragment.as_str());
            }
            out.push_str(field.field_html().as_str());
            for fragment in field.appended_html() {
                out.push_str(fragment.as_str());
            }
            out
        }
    }

    #[test]
    fn test_template_reads_decorations_in_order() {
        let mut field = FieldConfiguration::new();
        field
            .prepend(Html::raw("<span>$</span>"))
            .append(Html::raw("<span>.00</span>"))
            .set_field_content(Html::raw("<input>"));

        let out = InlineTemplate.render(&field.to_readonly().unwrap());
        assert_eq!(out, "<span>$</span><input><span>.00</span>");
    }
}
