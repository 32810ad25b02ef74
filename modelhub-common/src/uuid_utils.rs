//! UUID utilities

use uuid::Uuid;

/// Generate a new UUIDv4
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_v4() {
        let id = generate();
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(generate(), generate());
    }
}
