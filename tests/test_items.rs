// SimpleDB Rust Library for Amazon SimpleDB
// Copyright 2026 The simpledb-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Item operations against the live SimpleDB service; see `test_domain.rs`.

use simpledb::sdb::response::{GetAttributesResponse, SelectResponse};
use simpledb::sdb::response_traits::HasItem;
use simpledb::sdb::types::{Attribute, Item, SdbApi};
use simpledb_common::test_context::TestContext;
use simpledb_common::utils::rand_item_name;

fn context() -> TestContext {
    let _ = env_logger::builder().is_test(true).try_init();
    TestContext::new_from_env()
}

fn sorted(attributes: &[Attribute]) -> Vec<(String, String)> {
    let mut v: Vec<(String, String)> = attributes
        .iter()
        .map(|a| (a.name.clone(), a.value.clone()))
        .collect();
    v.sort();
    v
}

#[test]
#[ignore = "needs SimpleDB credentials"]
fn put_get_delete_attributes() {
    let ctx = context();
    let (domain_name, _guard) = ctx.create_domain_helper();
    let item_name = rand_item_name();

    let mut item = Item::new(&item_name);
    item.add_attribute("color", "red");
    item.add_attribute("color", "blue");
    item.add_attribute("size", "medium");
    ctx.client
        .put_attributes(&domain_name, item)
        .build()
        .send()
        .unwrap();

    let resp: GetAttributesResponse = ctx
        .client
        .get_attributes(&domain_name, &item_name)
        .consistent_read(true)
        .build()
        .send()
        .unwrap();
    assert_eq!(resp.item(), item_name);
    assert_eq!(
        sorted(resp.attributes()),
        vec![
            ("color".to_string(), "blue".to_string()),
            ("color".to_string(), "red".to_string()),
            ("size".to_string(), "medium".to_string()),
        ]
    );

    ctx.client
        .delete_attributes(&domain_name, &item_name)
        .attributes(vec![Attribute::new("color", "red")])
        .build()
        .send()
        .unwrap();
    let resp: GetAttributesResponse = ctx
        .client
        .get_attributes(&domain_name, &item_name)
        .attribute_names(vec!["color".to_string()])
        .consistent_read(true)
        .build()
        .send()
        .unwrap();
    assert_eq!(resp.attributes(), [Attribute::new("color", "blue")]);

    ctx.client
        .delete_item(&domain_name, &item_name)
        .build()
        .send()
        .unwrap();
    let resp: GetAttributesResponse = ctx
        .client
        .get_attributes(&domain_name, &item_name)
        .consistent_read(true)
        .build()
        .send()
        .unwrap();
    assert!(resp.attributes().is_empty());
}

#[test]
#[ignore = "needs SimpleDB credentials"]
fn batch_put_then_select() {
    let ctx = context();
    let (domain_name, _guard) = ctx.create_domain_helper();

    let items: Vec<Item> = (0..5)
        .map(|i| {
            let mut item = Item::new(format!("item-{i}"));
            item.add_attribute("n", i.to_string());
            item.add_attribute("parity", if i % 2 == 0 { "even" } else { "odd" });
            item
        })
        .collect();
    ctx.client
        .batch_put_attributes(&domain_name, items)
        .build()
        .send()
        .unwrap();

    let resp: SelectResponse = ctx
        .client
        .select(format!(
            "select * from `{domain_name}` where parity = 'even'"
        ))
        .consistent_read(true)
        .build()
        .send()
        .unwrap();
    let mut names: Vec<String> = resp.items().iter().map(|i| i.name.clone()).collect();
    names.sort();
    assert_eq!(names, ["item-0", "item-2", "item-4"]);
}
