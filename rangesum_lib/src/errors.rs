use crate::scalars::ScalarKind;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("start and end are required")]
    MissingEndpoint,

    #[error("range endpoints must hold one scalar kind, got {0:?} and {1:?}")]
    KindMismatch(ScalarKind, ScalarKind),

    #[error("cannot read {0:?} as a number, 64-bit integer or RFC-3339 instant")]
    UnknownScalar(String),
}
