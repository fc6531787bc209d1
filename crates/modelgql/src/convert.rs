mod field;
mod model;

use crate::{context::State, ConversionOptions};
use modelgql_core::schema::gql::Kind;

/// A conversion in progress, producing types of one kind.
pub(crate) struct Convert<'a> {
    state: &'a mut State,
    kind: Kind,
    options: &'a ConversionOptions,
}

impl<'a> Convert<'a> {
    pub(crate) fn new(state: &'a mut State, kind: Kind, options: &'a ConversionOptions) -> Self {
        Self {
            state,
            kind,
            options,
        }
    }
}
