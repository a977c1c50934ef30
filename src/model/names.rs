//! The configuration naming convention.
//!
//! Every configuration name in the graph is derived here, from a component
//! name and a binary's qualifying name. The convention:
//!
//! - declaration: `implementation` / `api` for the `main` component, else
//!   `<name>Implementation` / `<name>Api`
//! - published compile interface: `cppApiElements`, else `<name>CppApiElements`
//! - per binary: `cppCompile<Qualifier>` and `nativeLink<Qualifier>`
//! - published link interface: `linkElements`, else `<qualifier>LinkElements`
//!
//! The qualifying name elides the default (`main`) prefix and the test
//! executable suffix, so the default variant's configurations keep their
//! bare names. Scope wiring and the host's own declarations must agree on
//! these derivations, which is why they live in one place.

use crate::model::binary::Binary;
use crate::model::errors::ConfigError;
use crate::util::Name;

/// Name of the default component; elided from derived names.
pub const MAIN_NAME: &str = "main";

/// Trailing marker on test executable binary names; elided from qualifiers.
pub const TEST_EXECUTABLE_SUFFIX: &str = "Executable";

/// Per-binary compile configuration root.
pub const COMPILE_ROOT: &str = "cppCompile";

/// Per-binary link configuration root.
pub const LINK_ROOT: &str = "nativeLink";

/// Published link interface root.
pub const LINK_ELEMENTS: &str = "linkElements";

/// Published compile interface root.
pub const API_ELEMENTS: &str = "cppApiElements";

/// Private declaration configuration root, also the substitution token for
/// scope bucket names.
pub const IMPLEMENTATION: &str = "implementation";

/// Public declaration configuration root.
pub const API: &str = "api";

/// Derive the qualifying name of a binary.
///
/// Strips a literal `main` prefix when present, then for test executables
/// strips the trailing `Executable`, then lower-cases the first remaining
/// character. `mainDebug` qualifies as `debug`, `mainDebugTestExecutable`
/// as `debugTest`, and the bare `main` binary as the empty name.
///
/// A test executable whose name lacks the suffix does not follow the
/// convention and fails with [`ConfigError::MalformedBinaryName`].
pub fn qualifying_name(binary: &Binary) -> Result<Name, ConfigError> {
    let mut name = binary.name.as_str();
    if let Some(stripped) = name.strip_prefix(MAIN_NAME) {
        name = stripped;
    }
    if binary.kind.is_test_executable() {
        name = name
            .strip_suffix(TEST_EXECUTABLE_SUFFIX)
            .ok_or(ConfigError::MalformedBinaryName {
                binary: binary.name,
            })?;
    }
    Ok(Name::new(name).uncapitalized())
}

/// Join two camelCase fragments.
///
/// An empty side leaves the other unchanged; otherwise the trailing
/// fragment is capitalized onto the leading one.
pub fn compose(leading: impl AsRef<str>, trailing: impl AsRef<str>) -> Name {
    let leading = leading.as_ref();
    let trailing = trailing.as_ref();
    if leading.is_empty() {
        return Name::new(trailing);
    }
    if trailing.is_empty() {
        return Name::new(leading);
    }
    Name::new(format!("{}{}", leading, capitalize(trailing)))
}

/// Compile configuration name for a binary qualifier, e.g. `cppCompileDebug`.
pub fn compile_name(qualifier: Name) -> Name {
    compose(COMPILE_ROOT, qualifier)
}

/// Link configuration name for a binary qualifier, e.g. `nativeLinkDebug`.
pub fn link_name(qualifier: Name) -> Name {
    compose(LINK_ROOT, qualifier)
}

/// Published link interface name for a binary qualifier.
///
/// The empty qualifier keeps the bare `linkElements`; otherwise the
/// qualifier leads unchanged, e.g. `debugLinkElements`.
pub fn link_elements_name(qualifier: Name) -> Name {
    compose(qualifier, LINK_ELEMENTS)
}

/// Private declaration configuration name for a component.
pub fn implementation_name(component: Name) -> Name {
    compose(component_qualifier(component), IMPLEMENTATION)
}

/// Public declaration configuration name for a library component.
pub fn api_name(component: Name) -> Name {
    compose(component_qualifier(component), API)
}

/// Published compile interface name for a library component.
pub fn api_elements_name(component: Name) -> Name {
    compose(component_qualifier(component), API_ELEMENTS)
}

/// The default component's names carry no component prefix.
fn component_qualifier(component: Name) -> Name {
    if component.as_str() == MAIN_NAME {
        Name::default()
    } else {
        component
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
