use proc_macro::TokenStream;

mod entry;

/// Mark the entry point of a solution.
///
/// The annotated function must be called `main` and have the signature
/// `fn main(input: IStr, opts: &Opts) -> Result<T>`. It's renamed and a real
/// `main` is generated which reads standard input, runs it and prints its
/// answer.
#[proc_macro_attribute]
pub fn entry(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    crate::entry::build(args, item_stream)
}
