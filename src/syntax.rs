// src/syntax.rs
//! ルートテーブルの構文ビュー
//!
//! swc の `Expr` をルート抽出に必要な形だけに落とした所有型のツリー。
//! 抽出側はこの `Node` を網羅的に match するので、種類を追加するとコンパイルエラーで気付ける。

use swc_ecma_ast::{
    ArrowExpr, BlockStmt, BlockStmtOrExpr, CallExpr, Callee, Expr, ExprOrSpread, Function, Lit,
    ObjectLit, ParenExpr, Prop, PropName, PropOrSpread, ReturnStmt, Stmt, TsAsExpr,
    TsConstAssertion, TsNonNullExpr, TsSatisfiesExpr, TsTypeAssertion,
};

/// ルート定義中に現れる値の形
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Array(Vec<Node>),
    Object(Vec<Property>),
    Str(String),
    Bool(bool),
    Num(f64),
    Null,
    Ident(String),
    Function(FunctionShape),
    /// テンプレート文字列・呼び出し式・スプレッド・配列の穴など
    Other,
}

/// オブジェクトリテラルのプロパティ 1 つ
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// 識別子名・文字列リテラル・数値リテラルのキー。computed キーは None
    pub key: Option<String>,
    pub value: Node,
}

/// インライン関数の形
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionShape {
    /// 本体が `import("<文字列>")` の直接呼び出しだけの関数
    LazyImport(String),
    Opaque,
}

impl Node {
    /// swc の式を構文ビューに変換する
    pub fn from_expr(expr: &Expr) -> Self {
        match strip_wrappers(expr) {
            Expr::Array(array) => Node::Array(
                array
                    .elems
                    .iter()
                    .map(|elem| match elem {
                        Some(ExprOrSpread { spread: None, expr }) => Node::from_expr(expr),
                        _ => Node::Other,
                    })
                    .collect(),
            ),
            Expr::Object(object) => Node::Object(lower_object(object)),
            Expr::Lit(lit) => lower_lit(lit),
            Expr::Ident(ident) => Node::Ident(ident.sym.to_string()),
            Expr::Arrow(arrow) => Node::Function(arrow_shape(arrow)),
            Expr::Fn(fn_expr) => Node::Function(function_shape(&fn_expr.function)),
            _ => Node::Other,
        }
    }

    /// リテラル値の文字列表現。リテラル以外は None
    pub fn literal_text(&self) -> Option<String> {
        match self {
            Node::Str(text) => Some(text.clone()),
            Node::Num(value) => Some(format_number(*value)),
            Node::Bool(value) => Some(value.to_string()),
            _ => None,
        }
    }

    /// 最初に見つかった `key` プロパティの値
    pub fn property(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Object(props) => props
                .iter()
                .find(|prop| prop.key.as_deref() == Some(key))
                .map(|prop| &prop.value),
            _ => None,
        }
    }
}

/// JavaScript の `String(number)` と同じ見た目にする (1.0 → "1")
///
/// 絶対値が 1e21 以上、または 1e-6 未満なら指数表記 (1e+21, 1.5e-7)
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // -0 も "0"
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    value.to_string()
}

/// 括弧と TypeScript の型注釈だけのラッパーを剥がす
fn strip_wrappers(mut expr: &Expr) -> &Expr {
    loop {
        expr = match expr {
            Expr::Paren(ParenExpr { expr: inner, .. })
            | Expr::TsAs(TsAsExpr { expr: inner, .. })
            | Expr::TsSatisfies(TsSatisfiesExpr { expr: inner, .. })
            | Expr::TsConstAssertion(TsConstAssertion { expr: inner, .. })
            | Expr::TsTypeAssertion(TsTypeAssertion { expr: inner, .. })
            | Expr::TsNonNull(TsNonNullExpr { expr: inner, .. }) => &**inner,
            _ => return expr,
        };
    }
}

fn lower_object(object: &ObjectLit) -> Vec<Property> {
    let mut props = Vec::with_capacity(object.props.len());
    for prop in &object.props {
        // スプレッド (`...base`) は対象外
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        match &**prop {
            Prop::KeyValue(kv) => props.push(Property {
                key: prop_key(&kv.key),
                value: Node::from_expr(&kv.value),
            }),
            // `{ component }`
            Prop::Shorthand(ident) => props.push(Property {
                key: Some(ident.sym.to_string()),
                value: Node::Ident(ident.sym.to_string()),
            }),
            // `component() { return import("…") }`
            Prop::Method(method) => props.push(Property {
                key: prop_key(&method.key),
                value: Node::Function(function_shape(&method.function)),
            }),
            Prop::Assign(_) | Prop::Getter(_) | Prop::Setter(_) => {}
        }
    }
    props
}

fn prop_key(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => Some(s.value.to_string()),
        PropName::Num(n) => Some(format_number(n.value)),
        PropName::Computed(_) | PropName::BigInt(_) => None,
    }
}

fn lower_lit(lit: &Lit) -> Node {
    match lit {
        Lit::Str(s) => Node::Str(s.value.to_string()),
        Lit::Bool(b) => Node::Bool(b.value),
        Lit::Num(n) => Node::Num(n.value),
        Lit::Null(_) => Node::Null,
        _ => Node::Other,
    }
}

fn arrow_shape(arrow: &ArrowExpr) -> FunctionShape {
    match &*arrow.body {
        BlockStmtOrExpr::Expr(body) => import_target(body),
        BlockStmtOrExpr::BlockStmt(block) => block_shape(block),
    }
}

fn function_shape(function: &Function) -> FunctionShape {
    function
        .body
        .as_ref()
        .map_or(FunctionShape::Opaque, block_shape)
}

/// `{ return import("…") }` だけのブロック
fn block_shape(block: &BlockStmt) -> FunctionShape {
    match block.stmts.as_slice() {
        [Stmt::Return(ReturnStmt { arg: Some(arg), .. })] => import_target(arg),
        _ => FunctionShape::Opaque,
    }
}

fn import_target(expr: &Expr) -> FunctionShape {
    let Expr::Call(CallExpr {
        callee: Callee::Import(_),
        args,
        ..
    }) = strip_wrappers(expr)
    else {
        return FunctionShape::Opaque;
    };

    match args.as_slice() {
        [ExprOrSpread { spread: None, expr }] => match &**expr {
            Expr::Lit(Lit::Str(target)) => FunctionShape::LazyImport(target.value.to_string()),
            _ => FunctionShape::Opaque,
        },
        _ => FunctionShape::Opaque,
    }
}
