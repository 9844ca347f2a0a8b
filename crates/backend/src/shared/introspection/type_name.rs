use contracts::shared::metadata::TypeRef;

/// Human-readable type name.
///
/// Generic types render as `Base<Arg1, Arg2>` with the arity suffix removed
/// from the base; arguments are rendered the same way.
pub fn friendly_name(ty: &TypeRef) -> String {
    if !ty.is_generic() {
        return ty.simple_name().to_string();
    }

    let args: Vec<String> = ty.args.iter().map(friendly_name).collect();
    format!("{}<{}>", ty.base_name(), args.join(", "))
}
