use field_config::{
    FieldDefaults, FieldTemplate, FormContext, Html, ReadonlyFieldConfiguration,
};

/// Minimal stacked layout: container, label, decorations around the control, hint.
struct StackedTemplate;

impl FieldTemplate for StackedTemplate {
    type Output = String;

    fn render(&self, field: &ReadonlyFieldConfiguration) -> String {
        let mut out = format!(
            "<div class=\"{}\">\n",
            field.field_container_classes().as_string()
        );
        if let Some(label) = field.label() {
            let target = field.attributes().get("id").unwrap_or_default();
            out.push_str(&format!(
                "  <label for=\"{target}\" class=\"{}\">{label}</label>\n",
                field.label_classes().as_string()
            ));
        }
        out.push_str("  ");
        for fragment in field.prepended_html() {
            out.push_str(fragment.as_str());
        }
        out.push_str(field.field_html().as_str());
        for fragment in field.appended_html() {
            out.push_str(fragment.as_str());
        }
        out.push('\n');
        if let Some(hint) = field.hint() {
            out.push_str(&format!("  <small>{hint}</small>\n"));
        }
        out.push_str("</div>");
        out
    }
}

fn input_tag(attributes: &[(&str, &str)]) -> Html {
    let attrs: String = attributes
        .iter()
        .map(|(name, value)| format!(" {name}=\"{}\"", Html::text(value)))
        .collect();
    Html::raw(format!("<input{attrs}>"))
}

fn main() -> Result<(), field_config::Error> {
    let ctx = FormContext::builder()
        .with_defaults(
            FieldDefaults::loader()
                .with_file("demos/fields.toml", true)
                .with_env("FIELDS", "__")
                .build()?,
        )
        .build()?;

    let mut age = ctx.field("age");
    age.set_id("age")
        .set_label("Age")
        .with_hint("Whole years only")
        .append(Html::raw("<span class=\"unit\">years</span>"));

    age.set_field_content_with(|| {
        Ok::<_, std::convert::Infallible>(input_tag(&[
            ("type", "number"),
            ("id", "age"),
            ("name", "age"),
            ("min", "0"),
        ]))
    });

    let snapshot = age.to_readonly()?;
    println!("{}", StackedTemplate.render(&snapshot));
    println!(
        "booleans render as {:?}/{:?}/{:?}",
        snapshot.true_string(),
        snapshot.false_string(),
        snapshot.none_string()
    );

    Ok(())
}
