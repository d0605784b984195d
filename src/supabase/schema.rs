//! SQL DDL for the roles/profiles bootstrap.
//! Postgres-first design; every statement is safe to re-run.

/// Profiles schema with:
/// - `id` uuid referencing the auth user, cascading on delete
/// - `role` constrained to `admin`/`editor`/`viewer`, defaulting to `viewer`
/// - row-level security enabled on the table
///
/// `CREATE TABLE IF NOT EXISTS` makes repeated application a no-op;
/// re-enabling row-level security on an already-protected table is equally
/// harmless, so the whole unit is idempotent by construction.
pub const PROFILES_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS public.profiles (
    id uuid REFERENCES auth.users ON DELETE CASCADE PRIMARY KEY,
    role text DEFAULT 'viewer' CHECK (role IN ('admin', 'editor', 'viewer'))
);

ALTER TABLE public.profiles ENABLE ROW LEVEL SECURITY;
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_create_if_absent() {
        assert!(PROFILES_INIT.contains("CREATE TABLE IF NOT EXISTS public.profiles"));
    }

    #[test]
    fn schema_enables_row_level_security() {
        assert!(PROFILES_INIT.contains("ALTER TABLE public.profiles ENABLE ROW LEVEL SECURITY"));
    }

    #[test]
    fn role_column_is_constrained_with_viewer_default() {
        assert!(PROFILES_INIT.contains("DEFAULT 'viewer'"));
        assert!(PROFILES_INIT.contains("CHECK (role IN ('admin', 'editor', 'viewer'))"));
    }
}
