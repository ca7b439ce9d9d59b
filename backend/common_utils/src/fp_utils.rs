//! Identifier helpers

use crate::consts::{ALPHABETS, ID_LENGTH};

/// Generates an identifier of the form `{prefix}_{nanoid}`
#[inline]
pub fn generate_id_with_default_len(prefix: &str) -> String {
    let len: usize = ID_LENGTH;
    format!("{}_{}", prefix, nanoid::nanoid!(len, &ALPHABETS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_prefix() {
        let id = generate_id_with_default_len("sess");
        assert!(id.starts_with("sess_"));
        assert_eq!(id.len(), "sess_".len() + ID_LENGTH);
    }
}
