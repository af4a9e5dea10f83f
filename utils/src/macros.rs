/// Return `$error` if `$left` not equals `$right`
#[macro_export]
macro_rules! expect_equality {
    ($left: expr, $right: expr, $error: expr) => {
        if $left != $right {
            return Err($error($left, $right));
        }
    };
}

/// Return `$error` if the slice or vector `$seq` has no elements
#[macro_export]
macro_rules! expect_non_empty {
    ($seq: expr, $error: expr) => {
        if $seq.is_empty() {
            return Err($error);
        }
    };
}
