#[macro_export]
macro_rules! assoc_array {
    () => {
        $crate::AssocArray::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut array = $crate::AssocArray::new();
        $(array.set($key, $value);)+
        array
    }};
}
