//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod find;
pub(crate) mod resolve;
pub(crate) mod routes;

pub(crate) use check::CheckArgs;
pub(crate) use find::FindArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use routes::RoutesArgs;
