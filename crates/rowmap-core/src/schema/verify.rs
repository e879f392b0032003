use super::{Fields, Result};
use crate::Error;

struct Verify<'a> {
    fields: &'a Fields,
}

impl Fields {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { fields: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        debug_assert!(self.verify_ids_are_sequential());
        debug_assert!(self.verify_join_keys_match_aliases());

        self.verify_textual_fields_exist()?;
        Ok(())
    }

    fn verify_ids_are_sequential(&self) -> bool {
        for (index, field) in self.fields.fields.iter().enumerate() {
            assert_eq!(field.id, self.fields.id.field(index));
        }
        true
    }

    fn verify_join_keys_match_aliases(&self) -> bool {
        for (alias, join) in &self.fields.joins {
            assert_eq!(alias, &join.alias);
        }
        true
    }

    fn verify_textual_fields_exist(&self) -> Result<()> {
        for field in &self.fields.fields {
            let Some(textual) = &field.textual_field else {
                continue;
            };

            let found = self.fields.field_by_name(textual).is_some()
                || self.fields.field_by_property(textual).is_some();

            if !found {
                return Err(Error::invalid_field_reference(
                    &self.fields.type_name,
                    &field.name,
                    textual.as_str(),
                    "textual field",
                ));
            }
        }

        Ok(())
    }
}
