use proc_macro::{Delimiter, Group, Ident, Literal, Punct, Spacing, Span, TokenStream, TokenTree};

/// Name the annotated function is given.
const ENTRY: &str = "__entry";

/// Configurable macro code to build entry.
pub(crate) fn build(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    if let Some(tt) = args.into_iter().next() {
        return compile_error(tt.span(), "`entry` does not take any arguments");
    }

    let mut tokens = Vec::new();
    let mut next_is_name = false;
    let mut renamed = None;

    for tt in item_stream {
        match &tt {
            TokenTree::Ident(ident) if renamed.is_none() => {
                let name = ident.to_string();

                if std::mem::take(&mut next_is_name) {
                    if name != "main" {
                        return compile_error(ident.span(), "expected function named `main`");
                    }

                    renamed = Some(ident.span());
                    tokens.push(TokenTree::Ident(Ident::new(ENTRY, ident.span())));
                    continue;
                }

                next_is_name = name == "fn";
            }
            _ => {}
        }

        tokens.push(tt);
    }

    let Some(span) = renamed else {
        return compile_error(Span::call_site(), "expected `fn main`");
    };

    let mut stream = tokens.into_iter().collect::<TokenStream>();
    stream.extend(expand_main(span));
    stream
}

/// Expands into:
///
/// ```text
/// fn main() -> lib::prelude::Result<()> {
///     lib::cli::run(__entry)
/// }
/// ```
fn expand_main(span: Span) -> TokenStream {
    let mut result = path(span, &["lib", "prelude", "Result"]);
    result.push(punct(span, '<', Spacing::Alone));
    result.push(group(span, Delimiter::Parenthesis, TokenStream::new()));
    result.push(punct(span, '>', Spacing::Alone));

    let mut body = path(span, &["lib", "cli", "run"]);
    body.push(group(
        span,
        Delimiter::Parenthesis,
        TokenStream::from(TokenTree::Ident(Ident::new(ENTRY, span))),
    ));

    let mut out = vec![
        TokenTree::Ident(Ident::new("fn", span)),
        TokenTree::Ident(Ident::new("main", span)),
        group(span, Delimiter::Parenthesis, TokenStream::new()),
        punct(span, '-', Spacing::Joint),
        punct(span, '>', Spacing::Alone),
    ];

    out.extend(result);
    out.push(group(span, Delimiter::Brace, body.into_iter().collect()));
    out.into_iter().collect()
}

fn path(span: Span, segments: &[&str]) -> Vec<TokenTree> {
    let mut out = Vec::new();

    for (n, segment) in segments.iter().enumerate() {
        if n > 0 {
            out.push(punct(span, ':', Spacing::Joint));
            out.push(punct(span, ':', Spacing::Alone));
        }

        out.push(TokenTree::Ident(Ident::new(segment, span)));
    }

    out
}

fn punct(span: Span, c: char, spacing: Spacing) -> TokenTree {
    let mut p = Punct::new(c, spacing);
    p.set_span(span);
    TokenTree::Punct(p)
}

fn group(span: Span, delimiter: Delimiter, stream: TokenStream) -> TokenTree {
    let mut g = Group::new(delimiter, stream);
    g.set_span(span);
    TokenTree::Group(g)
}

/// Produce `compile_error!("message");` at the given span.
fn compile_error(span: Span, message: &str) -> TokenStream {
    let mut literal = Literal::string(message);
    literal.set_span(span);

    [
        TokenTree::Ident(Ident::new("compile_error", span)),
        punct(span, '!', Spacing::Alone),
        group(
            span,
            Delimiter::Parenthesis,
            TokenStream::from(TokenTree::Literal(literal)),
        ),
        punct(span, ';', Spacing::Alone),
    ]
    .into_iter()
    .collect()
}
