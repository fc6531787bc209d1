/// Accumulates attribute errors so a single compilation reports all of them.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet {
    errors: Vec<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.errors.push(err);
    }

    /// Returns `value` if no error was pushed, otherwise every error
    /// combined into one.
    pub(crate) fn finish<T>(self, value: T) -> syn::Result<T> {
        let mut errors = self.errors.into_iter();

        match errors.next() {
            None => Ok(value),
            Some(mut first) => {
                for err in errors {
                    first.combine(err);
                }
                Err(first)
            }
        }
    }
}
