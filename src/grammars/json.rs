//! A JSON recognizer that builds a tree
//!
//! Objects, arrays and members become groups; scalars become leaves named by
//! their source text, so `{"a": [1, true]}` gives
//! `Object [ Member [ String "a", Array [ Number 1, True true ] ] ]`.

use crate::matcher::{and, f, next, or, s, Matcher};
use crate::recursion::Recursive;
use crate::util::{number, string};

fn ws<'a>() -> Matcher<'a> {
    f(char::is_whitespace).zero_to_many()
}

fn comma<'a>() -> Matcher<'a> {
    and([ws(), s(","), ws()])
}

/// Zero or more `item`s separated by commas
fn list<'a>(item: Matcher<'a>) -> Matcher<'a> {
    and([item.clone(), and([comma(), item]).undo().zero_to_many()]).zero_to_one()
}

/// One complete JSON document, optionally surrounded by whitespace
pub fn json<'a>() -> Matcher<'a> {
    let value = Recursive::new();

    let member = and([
        string("\"").leaf("String"),
        ws(),
        s(":"),
        ws(),
        value.matcher(),
    ])
    .group("Member");

    let object = and([s("{"), ws(), list(member), ws(), s("}")]).group("Object");
    let array = and([s("["), ws(), list(value.matcher()), ws(), s("]")]).group("Array");

    let value = value.bind(or([
        object.undo(),
        array.undo(),
        string("\"").leaf("String"),
        number().leaf("Number"),
        s("true").leaf("True"),
        s("false").leaf("False"),
        s("null").leaf("Null"),
    ]));

    and([ws(), value, ws(), next().not()]).undo()
}
