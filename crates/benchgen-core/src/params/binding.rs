//! Algorithms binding clauses (`prefix`, `adaptors`)

use crate::variant::Binding;

/// `(prefix, adaptors)` for a binding
///
/// Native containers expose `Has_Element`/`Element`/`Next` as primitives of
/// `V2`; standard ones are called unprefixed through `use Container`.
pub(super) fn clauses(binding: &Binding, type_name: &str) -> (&'static str, String) {
    match binding {
        Binding::Native { property_map } => (
            "V2.",
            format!(
                "\n   function Count_If is new Conts.Algorithms.Count_If\
                 \n      (Container.Cursors.Forward, Container.Maps.{});",
                property_map.as_str()
            ),
        ),
        Binding::Standard {
            adaptors,
            property_map,
            suppress_checks,
        } => {
            let package = adaptors
                .clone()
                .unwrap_or_else(|| format!("{type_name}_Adaptors"));
            let suppress = if *suppress_checks {
                "pragma Suppress (Container_Checks);\n   "
            } else {
                ""
            };
            (
                "",
                format!(
                    "\n   {suppress}package Adaptors is new Conts.Adaptors.{package} (Container);\
                     \n   function Count_If is new Conts.Algorithms.Count_If\
                     \n      (Adaptors.Cursors.Forward, Adaptors.Maps.{});",
                    property_map.as_str()
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::PropertyMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn native_binding() {
        let (prefix, adaptors) = clauses(&Binding::native(PropertyMap::Pair), "Map");
        assert_eq!(prefix, "V2.");
        assert_eq!(
            adaptors,
            "\n   function Count_If is new Conts.Algorithms.Count_If\n      (Container.Cursors.Forward, Container.Maps.Pair);"
        );
    }

    #[test]
    fn standard_binding_defaults_package_to_type() {
        let (prefix, adaptors) = clauses(&Binding::standard(PropertyMap::Returned), "Vector");
        assert_eq!(prefix, "");
        assert_eq!(
            adaptors,
            "\n   package Adaptors is new Conts.Adaptors.Vector_Adaptors (Container);\
             \n   function Count_If is new Conts.Algorithms.Count_If\
             \n      (Adaptors.Cursors.Forward, Adaptors.Maps.Returned);"
        );
    }

    #[test]
    fn suppressed_checks_precede_adaptors() {
        let binding = Binding::standard(PropertyMap::Element)
            .adaptors("Indefinite_List_Adaptors")
            .without_checks();
        let (_, adaptors) = clauses(&binding, "List");
        assert!(adaptors.starts_with(
            "\n   pragma Suppress (Container_Checks);\n   package Adaptors is new Conts.Adaptors.Indefinite_List_Adaptors (Container);"
        ));
        assert!(adaptors.ends_with("Adaptors.Maps.Element);"));
    }
}
