/// Query-string codec usage example
use std::collections::HashMap;

use qparam::{
    Charset, ParsedQuery, add_parameter, build_natural_ordering, join_values_order_by_include_keys,
    remove_parameters,
};

fn main() {
    let utf8 = Some(Charset::utf_8());

    // Parse a gateway callback
    let parsed = ParsedQuery::parse("subject=%E6%B1%9F%E8%8B%8F&total_fee=0.01&a=1&a=2", utf8);
    println!("subject: {:?}", parsed.get("subject")); // Some("江苏")
    println!("a (last wins): {:?}", parsed.get("a")); // Some("2")
    println!("a (all): {:?}", parsed.get_all("a")); // ["1", "2"]
    println!();

    // Canonical string for signing
    let single = parsed.single_value_map();
    println!("natural ordering: {}", build_natural_ordering(&single)); // a=2&subject=江苏&total_fee=0.01
    println!();

    let mut params = HashMap::new();
    params.insert("service", "create_salesorder");
    params.insert("paymentType", "unionpay_mobile");
    println!(
        "joined: {}",
        join_values_order_by_include_keys(&params, &["paymentType", "service"])
    ); // unionpay_mobilecreate_salesorder
    println!();

    // Mutate a URL
    let url = add_parameter("www.baidu.com?a=b", "province", "江苏省", utf8);
    println!("after add: {url}"); // www.baidu.com?a=b&province=%E6%B1%9F%E8%8B%8F%E7%9C%81
    println!("after remove: {}", remove_parameters(&url, &["a"], utf8));
}
