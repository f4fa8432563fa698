//! Default well-known-type mappings injected into plugin parameters.
//!
//! Every rewritten `--<plugin>_out` value gets these `M<proto>=<package>`
//! entries prepended so generated code refers to gogo's `types` package
//! instead of golang/protobuf's `ptypes`.

/// Default mappings, in the order they are prepended.
///
/// The duration entry appears twice; downstream tooling may rely on the
/// exact number of entries, so it is kept as is.
pub const GOGO_TYPE_MAPPINGS: [&str; 6] = [
    "Mgoogle/protobuf/any.proto=github.com/gogo/protobuf/types",
    "Mgoogle/protobuf/duration.proto=github.com/gogo/protobuf/types",
    "Mgoogle/protobuf/duration.proto=github.com/gogo/protobuf/types",
    "Mgoogle/protobuf/struct.proto=github.com/gogo/protobuf/types",
    "Mgoogle/protobuf/timestamp.proto=github.com/gogo/protobuf/types",
    "Mgoogle/protobuf/wrappers.proto=github.com/gogo/protobuf/types",
];

/// Prepends `mappings` to a plugin output value.
///
/// A value with a `:` already carries a parameter list before its output
/// path, so the mappings join that list with a `,`. A value without one is
/// just an output path (or bare parameters), and the mappings become the
/// parameter list separated by `:`.
///
/// # Examples
///
/// ```
/// use omg_protoc_core::insert_type_mappings;
///
/// let mappings = ["Ma.proto=x", "Mb.proto=y"];
/// assert_eq!(insert_type_mappings(&mappings, "."), "Ma.proto=x,Mb.proto=y:.");
/// assert_eq!(
///     insert_type_mappings(&mappings, "plugins=grpc:out"),
///     "Ma.proto=x,Mb.proto=y,plugins=grpc:out"
/// );
/// ```
pub fn insert_type_mappings<S: AsRef<str>>(mappings: &[S], value: &str) -> String {
    let prefix = mappings
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");
    if value.contains(':') {
        format!("{prefix},{}", value.trim_start_matches([',', ' ']))
    } else {
        format!("{prefix}:{value}")
    }
}
