// src/extractor.rs
//! 構文ビューからルート情報を平坦なリストとして取り出す
//!
//! 親ルートの直後にその子孫が深さ優先で並ぶ (pre-order)。
//! 形が想定外の要素や値はエラーにせず、スキップするか未設定のままにする。

use indexmap::IndexMap;
use tracing::debug;

use crate::model::{DYNAMIC_COMPONENT, MetaValue, RouteRecord};
use crate::syntax::{FunctionShape, Node, Property};

/// `routes` 配列 (またはネストした `children` 配列) からルートを抽出する
pub fn extract_routes(node: &Node) -> Vec<RouteRecord> {
    let mut routes = Vec::new();
    collect_routes(node, 0, &mut routes);
    debug!(count = routes.len(), "extracted route records");
    routes
}

fn collect_routes(node: &Node, depth: usize, out: &mut Vec<RouteRecord>) {
    let Node::Array(elements) = node else {
        return;
    };

    for element in elements {
        let Node::Object(props) = element else {
            continue;
        };

        out.push(parse_route_object(props));

        // 自分のレコードの後、次の兄弟より前に子ルートを並べる
        if let Some(children) = element.property("children") {
            if matches!(children, Node::Array(_)) {
                debug!(depth = depth + 1, "descending into children");
            }
            collect_routes(children, depth + 1, out);
        }
    }
}

/// オブジェクトリテラル 1 つ分のプロパティから RouteRecord を組み立てる
fn parse_route_object(props: &[Property]) -> RouteRecord {
    let mut record = RouteRecord::default();

    for prop in props {
        let Some(key) = prop.key.as_deref() else {
            continue;
        };
        match key {
            "path" => record.path = prop.value.literal_text(),
            "name" => record.name = route_name(&prop.value),
            "component" => record.component = component_of(&prop.value),
            "meta" => record.meta = meta_of(&prop.value),
            "props" => record.has_props = true,
            _ => {}
        }
    }

    record
}

/// 偽値 (`''`, `false`, `0`) の名前は名前無しとして扱う
fn route_name(value: &Node) -> Option<String> {
    match value {
        Node::Str(text) if text.is_empty() => None,
        Node::Bool(false) => None,
        Node::Num(number) if *number == 0.0 || number.is_nan() => None,
        _ => value.literal_text(),
    }
}

fn component_of(value: &Node) -> Option<String> {
    match value {
        Node::Function(FunctionShape::LazyImport(target)) => Some(target.clone()),
        Node::Function(FunctionShape::Opaque) => Some(DYNAMIC_COMPONENT.to_string()),
        Node::Ident(name) => Some(name.clone()),
        Node::Array(_)
        | Node::Object(_)
        | Node::Str(_)
        | Node::Bool(_)
        | Node::Num(_)
        | Node::Null
        | Node::Other => None,
    }
}

fn meta_of(value: &Node) -> IndexMap<String, MetaValue> {
    let mut meta = IndexMap::new();
    let Node::Object(props) = value else {
        return meta;
    };
    for prop in props {
        if let Some(key) = &prop.key {
            meta.insert(key.clone(), meta_value(&prop.value));
        }
    }
    meta
}

/// 真偽値はそのまま、空でないリテラルは文字列化、それ以外は "true"
fn meta_value(value: &Node) -> MetaValue {
    match value {
        Node::Bool(flag) => MetaValue::Bool(*flag),
        Node::Str(text) if !text.is_empty() => MetaValue::Text(text.clone()),
        Node::Num(number) if *number != 0.0 && !number.is_nan() => {
            MetaValue::Text(crate::syntax::format_number(*number))
        }
        Node::Str(_)
        | Node::Num(_)
        | Node::Null
        | Node::Ident(_)
        | Node::Function(_)
        | Node::Array(_)
        | Node::Object(_)
        | Node::Other => MetaValue::Text("true".to_string()),
    }
}
