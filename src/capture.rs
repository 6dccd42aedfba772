//! Handing matched tokens to the outside world
//!
//! Capture hooks run a callback with the exact token a matcher consumed,
//! only when it succeeds. They are independent of the tree: use them to pull
//! scalars and lists out of a parse without building nodes at all.
//!
//! Destinations are borrowed cells, so they stay readable after the grammar
//! is dropped:
//!
//! ```text
//! let words = RefCell::new(Vec::new());
//! let word = f(char::is_alphabetic).one_to_many().grab_many(&words);
//! Code::new("Hello, World!").run(&or([word, next()]).one_to_many());
//! assert_eq!(words.into_inner(), ["Hello", "World"]);
//! ```

use std::cell::{Cell, RefCell};
use std::str::FromStr;

use crate::code::Token;
use crate::matcher::Matcher;

impl<'a> Matcher<'a> {
    /// Call `callback` with the matched token when the receiver succeeds
    pub fn on(self, callback: impl FnMut(Token) + 'a) -> Self {
        let callback = RefCell::new(callback);
        Matcher::new(move |c| {
            let ini = c.mark();
            if !self.run(c) {
                return false;
            }
            let token = c.token(ini, c.mark());
            (&mut *callback.borrow_mut())(token);
            true
        })
    }

    /// Store the matched token
    pub fn emit(self, out: &'a RefCell<Token>) -> Self {
        self.on(move |token| *out.borrow_mut() = token)
    }

    /// Append the matched token. Tokens repeat if the receiver runs again
    /// after backtracking; see [`Matcher::undo_capture`].
    pub fn emit_many(self, out: &'a RefCell<Vec<Token>>) -> Self {
        self.on(move |token| out.borrow_mut().push(token))
    }

    /// Store the matched text
    pub fn grab(self, out: &'a RefCell<String>) -> Self {
        self.on(move |token| *out.borrow_mut() = token.text)
    }

    /// Append the matched text
    pub fn grab_many(self, out: &'a RefCell<Vec<String>>) -> Self {
        self.on(move |token| out.borrow_mut().push(token.text))
    }

    /// Store the byte offset where the match started
    pub fn grab_pos(self, out: &'a Cell<usize>) -> Self {
        self.on(move |token| out.set(token.pos))
    }

    /// Store the matched text parsed as an integer
    ///
    /// Text that does not parse counts as a failed match: the cursor goes
    /// back to where it was and nothing is stored.
    pub fn grab_int(self, out: &'a Cell<i64>) -> Self {
        self.convert(move |value| out.set(value))
    }

    /// Store the matched text parsed as a float, like [`Matcher::grab_int`]
    pub fn grab_float(self, out: &'a Cell<f64>) -> Self {
        self.convert(move |value| out.set(value))
    }

    /// Fail, restoring the cursor, unless the matched text parses as `T`
    pub fn parses<T: FromStr + 'a>(self) -> Self {
        self.convert(|_: T| ())
    }

    /// When the receiver fails, drop whatever it appended to `out`
    pub fn undo_capture<T: 'a>(self, out: &'a RefCell<Vec<T>>) -> Self {
        Matcher::new(move |c| {
            let len = out.borrow().len();
            if self.run(c) {
                return true;
            }
            out.borrow_mut().truncate(len);
            false
        })
    }

    /// Log every attempt at `DEBUG` level without changing the outcome
    pub fn debug(self) -> Self {
        Matcher::new(move |c| {
            let ini = c.mark();
            let ok = self.run(c);
            let token = c.token(ini, c.mark());
            tracing::debug!(
                matched = ok,
                token = %token.text,
                pos = token.pos,
                row = token.row,
                col = token.col,
                "match"
            );
            ok
        })
    }

    fn convert<T: FromStr + 'a>(self, store: impl Fn(T) + 'a) -> Self {
        Matcher::new(move |c| {
            let ini = c.mark();
            if !self.run(c) {
                return false;
            }
            match c.token(ini, c.mark()).text.parse::<T>() {
                Ok(value) => {
                    store(value);
                    true
                }
                Err(_) => {
                    c.restore(ini);
                    false
                }
            }
        })
    }
}
