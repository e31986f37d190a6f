//! Build a filter expression and print the rendered WHERE clause body.

use myquery::{Value, col};

fn main() {
    let filter = col("name")
        .eq("wubin")
        .or(col("school").in_list(vec!["havard", "beijing unv"]))
        .and(col("delete_at").is_null());
    println!("where {}", filter.sql());

    let recent = col("name")
        .ne("wubin")
        .or(col("create_at").lt(Value::func("now()")));
    println!("where {}", recent.sql());
}
