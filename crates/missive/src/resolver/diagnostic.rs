//! The compiled-in diagnostic bundle.
//!
//! When resolution fails, the failure is reported by rendering a new message
//! through the same pipeline against this fixed table, bypassing the bundle
//! provider entirely. The table is closed: every failure the pipeline can
//! produce has a key here, every template references only `$1`..`$3` with
//! `%s` conversions, and the positional variables are always strings.
//! A diagnostic render therefore always terminates with text and can never
//! trigger a second diagnostic.

use std::sync::LazyLock;

use crate::bundle::Bundle;

/// Context under which diagnostic messages resolve.
pub(crate) const CONTEXT: &str = "missive.Message";

/// Bundle name of the diagnostic table.
pub(crate) const BUNDLE_NAME: &str = "missing";

static TEMPLATES: LazyLock<Bundle> = LazyLock::new(|| {
    Bundle::from_pairs([
        (
            "defaultPackage",
            "$1,$2~Message bundle context [%s] resolves to the default package. Message key is [%s]. (This is a meta error message.)",
        ),
        (
            "missingBundle",
            "$1,$2~Missing message bundle [%s]. Message key is [%s]. (This is a meta error message.)",
        ),
        (
            "missingKey",
            "$1,$2~The message key [%s] cannot be found in bundle [%s]. (This is a meta error message.)",
        ),
        (
            "blankMessage",
            "$1,$2~The message for message key [%s] in bundle [%s] is blank. (This is a meta error message.)",
        ),
        (
            "badFormatArgument",
            "$1,$2,$3~Invalid format argument name [%s] for message key [%s] in bundle [%s]. (This is a meta error message.)",
        ),
        (
            "missingArgument",
            "$1,$2,$3~Cannot find argument named [%s] for message key [%s] in bundle [%s]. (This is a meta error message.)",
        ),
        (
            "formatException",
            "$1,$2,$3~Format exception [%s] for message key [%s] in bundle [%s]. (This is a meta error message.)",
        ),
    ])
});

/// The diagnostic template table.
pub(crate) fn templates() -> &'static Bundle {
    &TEMPLATES
}
