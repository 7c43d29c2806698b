// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod arguments;
mod array;
mod functions;
mod math;
mod string;

use std::fmt::Debug;

use crate::{RuntimeError, Value};

pub type BuiltinFunctionSignature = &'static dyn Fn(Vec<Value>) -> Result<Value, RuntimeError>;

pub struct BuiltinFunction {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub documentation: &'static str,
    pub function: BuiltinFunctionSignature,
}

impl BuiltinFunction {
    /// The primary name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        let aliases: &'static [&'static str] = self.aliases;
        std::iter::once(self.name).chain(aliases.iter().copied())
    }
}

impl Debug for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

pub struct Builtin;

impl Builtin {
    pub const FUNCTIONS: &'static [BuiltinFunction] = &[
        BuiltinFunction {
            name: "print",
            aliases: &["print_kora", "likha"],
            documentation: "Writes its arguments to the output, separated by spaces.",
            function: &functions::print,
        },
        BuiltinFunction {
            name: "input",
            aliases: &["input_lou"],
            documentation: "Reads one line from the input, after writing the optional prompt.",
            function: &functions::input,
        },
        BuiltinFunction {
            name: "int",
            aliases: &[],
            documentation: "Converts a number, boolean or string to an int.",
            function: &functions::int,
        },
        BuiltinFunction {
            name: "float",
            aliases: &[],
            documentation: "Converts a number, boolean or string to a float.",
            function: &functions::float,
        },
        BuiltinFunction {
            name: "string",
            aliases: &[],
            documentation: "Converts any value to its display form.",
            function: &functions::string,
        },
        BuiltinFunction {
            name: "bool",
            aliases: &[],
            documentation: "Returns whether the value is truthy.",
            function: &functions::bool,
        },
        BuiltinFunction {
            name: "type",
            aliases: &[],
            documentation: "Returns the name of the type of the value.",
            function: &functions::type_of,
        },
        BuiltinFunction {
            name: "len",
            aliases: &["length_kora"],
            documentation: "Returns the number of characters of a string, elements of an array or properties of an object.",
            function: &array::len,
        },
        BuiltinFunction {
            name: "range",
            aliases: &[],
            documentation: "Creates an array of ints: `range(end)`, `range(start, end)` or `range(start, end, step)`.",
            function: &array::range,
        },
        BuiltinFunction {
            name: "push",
            aliases: &["append", "add_kora"],
            documentation: "Appends the values to the end of the array.",
            function: &array::push,
        },
        BuiltinFunction {
            name: "pop",
            aliases: &[],
            documentation: "Removes and returns the last element of the array.",
            function: &array::pop,
        },
        BuiltinFunction {
            name: "remove",
            aliases: &["remove_kora"],
            documentation: "Removes and returns the element at the index of an array, or the property with the name of an object.",
            function: &array::remove,
        },
        BuiltinFunction {
            name: "sort",
            aliases: &["sort_kora"],
            documentation: "Sorts an array of numbers or an array of strings in place.",
            function: &array::sort,
        },
        BuiltinFunction {
            name: "reverse",
            aliases: &["reverse_kora"],
            documentation: "Reverses an array in place, or returns a reversed copy of a string.",
            function: &array::reverse,
        },
        BuiltinFunction {
            name: "join",
            aliases: &["join_kora"],
            documentation: "Joins the display forms of the elements with the separator.",
            function: &array::join,
        },
        BuiltinFunction {
            name: "copy",
            aliases: &["copy_kora"],
            documentation: "Returns a shallow copy of an array or object.",
            function: &array::copy,
        },
        BuiltinFunction {
            name: "keys",
            aliases: &[],
            documentation: "Returns the property names of an object in insertion order.",
            function: &array::keys,
        },
        BuiltinFunction {
            name: "split",
            aliases: &["split_kora"],
            documentation: "Splits a string by the separator, or by whitespace when none is given.",
            function: &string::split,
        },
        BuiltinFunction {
            name: "upper",
            aliases: &["upper_kora"],
            documentation: "Returns the string in upper case.",
            function: &string::upper,
        },
        BuiltinFunction {
            name: "lower",
            aliases: &["lower_kora"],
            documentation: "Returns the string in lower case.",
            function: &string::lower,
        },
        BuiltinFunction {
            name: "replace",
            aliases: &["replace_kora"],
            documentation: "Replaces every occurrence of the pattern in the string.",
            function: &string::replace,
        },
        BuiltinFunction {
            name: "contains",
            aliases: &[],
            documentation: "Checks whether a string contains a substring, an array contains an element or an object has a property.",
            function: &string::contains,
        },
        BuiltinFunction {
            name: "find",
            aliases: &["bisora"],
            documentation: "Returns the index of a substring or element, or -1 when absent.",
            function: &string::find,
        },
        BuiltinFunction {
            name: "abs",
            aliases: &["abs_kora"],
            documentation: "Returns the absolute value.",
            function: &math::abs,
        },
        BuiltinFunction {
            name: "sqrt",
            aliases: &["sqrt_kora"],
            documentation: "Returns the square root as a float.",
            function: &math::sqrt,
        },
        BuiltinFunction {
            name: "pow",
            aliases: &["pow_kora"],
            documentation: "Raises the base to the exponent.",
            function: &math::pow,
        },
        BuiltinFunction {
            name: "floor",
            aliases: &["floor_kora"],
            documentation: "Rounds down to an int.",
            function: &math::floor,
        },
        BuiltinFunction {
            name: "ceil",
            aliases: &["ceil_kora"],
            documentation: "Rounds up to an int.",
            function: &math::ceil,
        },
        BuiltinFunction {
            name: "round",
            aliases: &["round_kora"],
            documentation: "Rounds to the nearest int, halfway cases away from zero.",
            function: &math::round,
        },
        BuiltinFunction {
            name: "min",
            aliases: &["min_kora"],
            documentation: "Returns the smallest of the numbers, given as arguments or as one array.",
            function: &math::min,
        },
        BuiltinFunction {
            name: "max",
            aliases: &["max_kora"],
            documentation: "Returns the largest of the numbers, given as arguments or as one array.",
            function: &math::max,
        },
        BuiltinFunction {
            name: "sum",
            aliases: &["sum_kora"],
            documentation: "Adds up an array of numbers.",
            function: &math::sum,
        },
        BuiltinFunction {
            name: "error",
            aliases: &["error_kora"],
            documentation: "Raises a runtime error with the message.",
            function: &functions::error,
        },
        BuiltinFunction {
            name: "time",
            aliases: &["time_kora"],
            documentation: "Returns the seconds since the Unix epoch as a float.",
            function: &functions::time,
        },
    ];

    #[must_use]
    pub fn find(name: &str) -> Option<&'static BuiltinFunction> {
        Self::FUNCTIONS.iter().find(|function| function.names().any(|x| x == name))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();

        for function in Builtin::FUNCTIONS {
            for name in function.names() {
                assert!(seen.insert(name), "Duplicate builtin name `{name}`");
            }
        }
    }

    #[test]
    fn find_by_alias() {
        assert_eq!(Builtin::find("bisora").map(|x| x.name), Some("find"));
        assert_eq!(Builtin::find("append").map(|x| x.name), Some("push"));
        assert!(Builtin::find("printf").is_none());
    }

    #[test]
    fn names_do_not_collide_with_keywords() {
        for function in Builtin::FUNCTIONS {
            for name in function.names() {
                assert_eq!(hixa::Keyword::parse(name), None, "`{name}` is a keyword");
            }
        }
    }
}
