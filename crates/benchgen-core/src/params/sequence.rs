//! List and vector parameters

use crate::error::GenerateError;
use crate::variant::{ElementType, VariantDescriptor};
use benchgen_artifact::ArtifactId;
use benchgen_template::ParameterMap;

/// Long element, stored out of line by most string containers
const LONG: &str = "foofoofoofoofoofoofoofoofoofoofoofoofoofoofoofoofoo";

pub(super) fn derive(
    descriptor: &VariantDescriptor,
    element: ElementType,
    definite: &str,
    params: &mut ParameterMap,
) -> Result<ArtifactId, GenerateError> {
    let type_name = descriptor.kind().as_str();
    let category = match element {
        ElementType::Integer => format!("Integer {type_name}"),
        ElementType::String | ElementType::UnboundedString => format!("String {type_name}"),
    };

    params.insert("definite", definite);
    params.insert("elem_type", element.as_str());
    params.insert("category", category);
    params.insert("append", append(element));
    params.insert(
        "discriminant",
        if descriptor.storage().is_bounded() {
            " (Capacity => Items_Count)"
        } else {
            ""
        },
    );

    let id = ArtifactId::from_segments([
        type_name,
        descriptor.base().name(),
        definite,
        descriptor.storage().as_str(),
        element.as_str(),
    ])?;
    Ok(id)
}

/// Fill clause; strings alternate short and long values
fn append(element: ElementType) -> String {
    let (short, long) = match element {
        ElementType::Integer => return "V2.Append (C);".to_string(),
        ElementType::String => ("\"foo\"".to_string(), format!("\"{LONG}\"")),
        ElementType::UnboundedString => (
            "To_Unbounded_String (\"foo\")".to_string(),
            format!("To_Unbounded_String\n               (\"{LONG}\")"),
        ),
    };
    format!(
        "if C mod 2 = 0 then\
         \n            V2.Append ({short});\
         \n         else\
         \n            V2.Append ({long});\
         \n         end if;"
    )
}
