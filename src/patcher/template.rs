use crate::error::PatchError;

/// Client-initialization block injected at the head of the target module.
/// The import line doubles as the idempotence marker.
pub const SUPABASE_CLIENT_TEMPLATE: &str = r#"import { createClient } from '@supabase/supabase-js'

const supabaseUrl = process.env.{{url_var}} || ''
const supabaseAnonKey = process.env.{{key_var}} || ''

export const supabase = createClient(supabaseUrl, supabaseAnonKey)

"#;

/// Substitutions applied to [`SUPABASE_CLIENT_TEMPLATE`]. The injected code
/// references credentials by environment-variable name; secret values never
/// land in the target file.
pub const CLIENT_TEMPLATE_VARS: [(&str, &str); 2] = [
    ("url_var", "SUPABASE_URL"),
    ("key_var", "SUPABASE_ANON_KEY"),
];

/// Render a template by substituting `{{name}}` placeholders.
/// Any placeholder left unresolved fails the render.
pub fn render(template: &str, vars: &[(&str, &str)]) -> Result<String, PatchError> {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    if let Some(start) = out.find("{{") {
        let rest = &out[start + 2..];
        let name = match rest.find("}}") {
            Some(end) => &rest[..end],
            None => rest,
        };
        return Err(PatchError::TemplateInvalid(name.trim().to_string()));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_default_block() {
        let block = render(SUPABASE_CLIENT_TEMPLATE, &CLIENT_TEMPLATE_VARS).unwrap();
        assert!(block.contains("process.env.SUPABASE_URL"));
        assert!(block.contains("process.env.SUPABASE_ANON_KEY"));
        assert!(block.contains("createClient(supabaseUrl, supabaseAnonKey)"));
        assert!(!block.contains("{{"));
    }

    #[test]
    fn rendered_block_carries_the_marker() {
        let block = render(SUPABASE_CLIENT_TEMPLATE, &CLIENT_TEMPLATE_VARS).unwrap();
        assert!(block.contains(crate::patcher::SUPABASE_MARKER));
    }

    #[test]
    fn missing_substitution_reports_the_placeholder_name() {
        let err = render("const x = {{missing}}", &[]).unwrap_err();
        assert!(matches!(err, PatchError::TemplateInvalid(ref name) if name == "missing"));
    }

    #[test]
    fn unterminated_placeholder_is_invalid() {
        let err = render("const x = {{broken", &[]).unwrap_err();
        assert!(matches!(err, PatchError::TemplateInvalid(_)));
    }

    #[test]
    fn unknown_vars_are_ignored() {
        let out = render("plain text", &[("unused", "value")]).unwrap();
        assert_eq!(out, "plain text");
    }
}
