mod scanner;
mod sexpr_tokenizer;

pub use scanner::Scanner;
pub use sexpr_tokenizer::{SExprTokenizer, tokenize};
