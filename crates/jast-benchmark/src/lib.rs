//! Fixtures shared by the benchmarks.

/// A compilation unit with `methods` copies of a method that exercises
/// declarations, statements and every placeholder the finalizer rewrites.
pub fn synthetic_source(methods: usize) -> String {
    let mut source = String::from("public class Synthetic {\n");
    for i in 0..methods {
        source.push_str(&format!(
            r#"    public int method{i}(int[] xs, final String... rest) {{
        int total = {i};
        for (int x : xs) {{
            if (x > total && !skip(x)) total += x; else total -= 1;
        }}
        Object a = java.util.ArrayList::new;
        Object b = String::valueOf;
        Object c = java.util.HashMap.class;
        try {{
            this.sink(a, b, c);
        }} catch (IllegalStateException e) {{
            return -1;
        }}
        return (total + rest.length) % 7;
    }}

"#
        ));
    }
    source.push_str("}\n");
    source
}
