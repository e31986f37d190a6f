//! Build a pagination descriptor and derive list-response metadata.

use myquery::{Order, PageRet, QueryResult, page};

fn main() -> QueryResult<()> {
    let p = page()
        .order(Order::desc("create_at"))
        .order(Order::asc("score"))
        .limit(20, 10)?;
    println!("{}", p.sql());

    let ret = PageRet::with_total(&p, 97)?;
    println!("page {} of {:?}", ret.page_no, ret.total_pages);

    Ok(())
}
