/// Unwraps an `Err`, panicking with the `Ok` value otherwise. Extra arguments
/// are appended to the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps an `Ok`, panicking with the displayed error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Ok(v) => v,
            Err(e) => {
                use std::fmt::Write;
                let mut msg = format!("expected `Ok`; error=\"{}\"", e);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        match $e {
            None => {}
            actual => panic!("expected `None`; actual={:?}", actual),
        }
    };
}
