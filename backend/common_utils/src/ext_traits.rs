//! This module holds traits for extending functionalities for existing datatypes
//! & inbuilt datatypes.

use error_stack::ResultExt;
use serde::Deserialize;

use crate::errors::{self, CustomResult};

/// Extending functionalities of `[u8]` for performing parsing
pub trait BytesExt {
    /// Convert `[u8]` into type `<T>` by using `serde::Deserialize`
    fn parse_struct<'de, T>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>;
}

impl BytesExt for [u8] {
    fn parse_struct<'de, T>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>,
    {
        serde_json::from_slice(self)
            .change_context(errors::ParsingError::StructParseFailure(type_name))
            .attach_printable_lazy(|| {
                format!(
                    "Unable to parse {type_name} from bytes {:?}",
                    String::from_utf8_lossy(self)
                )
            })
    }
}

/// Extending functionalities of optional form input
pub trait FormValueExt {
    /// `None` for absent, empty or whitespace-only values, trimmed text otherwise
    fn non_empty(&self) -> Option<&str>;

    /// Whether a checkbox-like form value is set (present, non-empty and not `0`/`false`)
    fn is_truthy(&self) -> bool;
}

impl FormValueExt for Option<String> {
    fn non_empty(&self) -> Option<&str> {
        self.as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    fn is_truthy(&self) -> bool {
        self.non_empty()
            .is_some_and(|value| !matches!(value, "0" | "false"))
    }
}
