// Internal generators used by `tola_aop` itself.

pub mod aspect_lists;
pub mod operation_forms;

use syn::{parse::Parse, parse::ParseStream, LitInt};

/// Highest arity to generate: `gen!(12)`.
pub struct MaxArity {
    pub max: usize,
}

impl Parse for MaxArity {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(MaxArity { max })
    }
}
