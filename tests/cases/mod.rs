// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Ok($($pattern:tt)*) }) => {
        match $result {
            Ok($($pattern)*) => {},
            other => panic!("Expected Ok({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Default case - treat as expression for equality comparison
    // Matching keeps temporaries in `$result` alive for the comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            actual => {
                pretty_assertions::assert_eq!($expected, actual, "< expected / got >");
            }
        }
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] outcome, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_outcome() {
            let (_, outcome) = run();
            assert_case!(outcome, $expected);
        }
    };

    ([$($attrs:meta)*] contents, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_contents() {
            let (seq, _) = run();
            let expected: &[i32] = &$expected;
            pretty_assertions::assert_eq!(expected, seq.as_slice());
        }
    };

    ([$($attrs:meta)*] size, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_size() {
            let (seq, _) = run();
            assert_case!(seq.size(), { $expected });
            assert_eq!(seq.is_empty(), seq.size() == 0);
        }
    };

    ([$($attrs:meta)*] capacity, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_capacity() {
            let (seq, _) = run();
            assert_case!(seq.capacity(), { $expected });
        }
    };

    ([$($attrs:meta)*] display, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_display() {
            let (seq, _) = run();
            let rendered = seq.to_string();
            assert_case!(rendered.as_str(), { $expected });
        }
    };

    // Cursor output must match the visible contents
    ([$($attrs:meta)*] cursor, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_cursor() {
            let (seq, _) = run();
            let mut cursor = seq.cursor();
            let mut yielded = Vec::new();
            while cursor.has_next() {
                yielded.push(cursor.next_value().unwrap());
            }
            assert_eq!(cursor.next_value(), Err(intlist::Error::NoMoreElements));
            let expected: &[i32] = &$expected;
            pretty_assertions::assert_eq!(expected, yielded.as_slice());
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields (now correctly capturing braces)
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    // Parse assertion field with potential attributes (handles both cases)
    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, then the operations to run against a fresh
// sequence, then any order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        ops: $ops:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            fn run() -> (intlist::IntSequence, intlist::Result<()>) {
                let ops: fn(&mut intlist::IntSequence) -> intlist::Result<()> = $ops;
                let mut seq = intlist::IntSequence::new();
                let outcome = ops(&mut seq);
                (seq, outcome)
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
