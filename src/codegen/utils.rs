//! Naming and prop-transform helpers shared by the emitters.

use crate::operation::Param;
use crate::ts::TsParam;

/// Convert an identifier to PascalCase, preserving interior casing
/// (`listPets` -> `ListPets`, `get-item` -> `GetItem`).
pub fn pascal(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert operation props to function parameters, keeping declaration order.
pub(crate) fn props_to_ts_params(params: &[Param]) -> Vec<TsParam> {
    params
        .iter()
        .map(|p| TsParam {
            name: p.name.clone(),
            ty: Some(p.ty.clone()),
            optional: !p.required,
        })
        .collect()
}

/// Wrap every prop type in `MaybeRef<…>` for Vue targets. The declared type
/// and the runtime value diverge intentionally; the emitters rebind each
/// prop through `unref` before constructing the request.
pub(crate) fn wrap_props_maybe_ref(params: &[Param]) -> Vec<Param> {
    params
        .iter()
        .cloned()
        .map(|mut p| {
            p.ty = format!("MaybeRef<{}>", p.ty);
            p
        })
        .collect()
}

/// Rebinding statements dereferencing Vue refs back to plain values.
pub(crate) fn unref_statements(params: &[Param]) -> Vec<String> {
    params
        .iter()
        .map(|p| format!("{name} = unref({name});", name = p.name))
        .collect()
}
