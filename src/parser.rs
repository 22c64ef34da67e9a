use swc_common::{FileName, SourceMap, Spanned, sync::Lrc};
use swc_ecma_ast::{BindingIdent, EsVersion, Module, Pat, VarDeclarator};
use swc_ecma_parser::{EsConfig, Parser as SwcParser, StringInput, Syntax, TsConfig, lexer::Lexer};
use swc_ecma_visit::{Visit, VisitWith};
use tracing::{debug, warn};

use std::path::Path;

use crate::error::{Error, Result};
use crate::syntax::Node;

/// ルートテーブルとみなす変数名
pub const ROUTES_BINDING: &str = "routes";

/// ソースをどの構文で解析するか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseSyntax {
    /// JavaScript (JSX 有効)
    Ecma,
    TypeScript,
    Tsx,
}

impl ParseSyntax {
    /// 拡張子から構文を決める。不明な拡張子は JavaScript 扱い
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ts" | "mts" | "cts") => ParseSyntax::TypeScript,
            Some("tsx") => ParseSyntax::Tsx,
            _ => ParseSyntax::Ecma,
        }
    }

    fn to_swc(self) -> Syntax {
        match self {
            ParseSyntax::Ecma => Syntax::Es(EsConfig {
                jsx: true,
                ..Default::default()
            }),
            ParseSyntax::TypeScript | ParseSyntax::Tsx => Syntax::Typescript(TsConfig {
                tsx: self == ParseSyntax::Tsx,
                decorators: true,
                ..Default::default()
            }),
        }
    }
}

/// AST をトラバースして最初の `routes` 変数宣言を探す Visitor
#[derive(Default)]
struct RoutesVisitor {
    /// 見つかった `routes` の初期化式 (初期化式が無ければ `Node::Other`)
    found: Option<Node>,
    /// デバッグ用のカウンタ
    declarator_count: usize,
}

impl Visit for RoutesVisitor {
    /// トップレベル・export・関数内を問わず、文書順で最初の `routes` だけを採用する
    fn visit_var_declarator(&mut self, declarator: &VarDeclarator) {
        if self.found.is_some() {
            return;
        }
        self.declarator_count += 1;

        if let Pat::Ident(BindingIdent { id, .. }) = &declarator.name {
            if &*id.sym == ROUTES_BINDING {
                let init = declarator
                    .init
                    .as_deref()
                    .map_or(Node::Other, Node::from_expr);
                if !matches!(init, Node::Array(_)) {
                    debug!("`{}` is not initialised with an array literal", ROUTES_BINDING);
                }
                self.found = Some(init);
                return;
            }
        }

        // 子ノードも訪問 (関数式の中の宣言など)
        declarator.visit_children_with(self);
    }
}

/// ソース文字列を swc でモジュールとして解析する
///
/// - `file`: エラーメッセージと SourceMap 用のファイルパス (無ければ匿名扱い)
pub fn parse_module(source: &str, file: Option<&Path>, syntax: ParseSyntax) -> Result<Module> {
    let cm: Lrc<SourceMap> = Default::default();

    let file_name = match file {
        Some(path) => FileName::Real(path.to_path_buf()),
        None => FileName::Anon,
    };
    let fm = cm.new_source_file(file_name, source.to_string());

    let lexer = Lexer::new(
        syntax.to_swc(),
        EsVersion::EsNext,
        StringInput::from(&*fm),
        None,
    );

    let mut parser = SwcParser::new_from(lexer);

    let module = parser.parse_module().map_err(|e| {
        let loc = cm.lookup_char_pos(e.span().lo);
        Error::Parse {
            file: display_name(file),
            message: format!(
                "{} (line {}, column {})",
                e.kind().msg(),
                loc.line,
                loc.col_display + 1
            ),
        }
    })?;

    // 回復可能なエラーは解析を止めない
    for recovered in parser.take_errors() {
        warn!(
            file = %display_name(file),
            "recovered from syntax error: {}",
            recovered.kind().msg()
        );
    }

    Ok(module)
}

/// モジュール内で最初に宣言された `routes` 変数の初期化式を返す
///
/// 戻り値:
/// - Some(node) → `routes` が見つかった (配列リテラルでなければ node は配列以外)
/// - None       → `routes` という変数宣言が無い
pub fn find_routes_binding(module: &Module) -> Option<Node> {
    let mut visitor = RoutesVisitor::default();
    module.visit_with(&mut visitor);
    debug!(
        declarators = visitor.declarator_count,
        found = visitor.found.is_some(),
        "scanned variable declarations"
    );
    visitor.found
}

fn display_name(file: Option<&Path>) -> String {
    file.map_or_else(|| "<input>".to_string(), |path| path.display().to_string())
}
