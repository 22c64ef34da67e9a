//! Integration tests for route extraction and aggregation.

use indoc::indoc;
use pretty_assertions::assert_eq;
use route_asset_analyzer::{
    AnalyzeOptions, Error, FlaggedRoute, MetaValue, ParseSyntax, RouteKind, analyze_file,
    analyze_source,
};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

const VUE_ROUTER: &str = indoc! {r#"
    import Vue from 'vue'
    import Router from 'vue-router'
    import Home from '@/views/Home.vue'
    import Layout from '@/layout/index.vue'

    Vue.use(Router)

    const routes = [
      { path: '/', redirect: '/home' },
      { path: '/home', name: 'Home', component: Home, meta: { keepAlive: true, title: 'Home' } },
      {
        path: '/user',
        component: Layout,
        meta: { flag: 'beta' },
        children: [
          { path: '/user/list', name: 'UserList', component: () => import('@/views/user/list.vue') },
          { path: '/user/detail/:id', name: 'UserDetail', props: true, component: () => import('@/views/user/detail.vue') },
          { path: '/user/edit-detail/:id', name: 'UserEdit', component: (resolve) => require(['@/views/user/edit.vue'], resolve) },
        ],
      },
      {
        path: '/goods',
        component: Layout,
        children: [
          { path: '/goods/add', name: 'GoodsAdd', component: () => import('@/views/goods/add.vue') },
          { path: '/goods/view', name: 'Home', meta: { keepAlive: false } },
        ],
      },
      { path: '*', component: () => import('@/views/404.vue') },
    ]

    export default new Router({ mode: 'history', routes })
"#};

fn analyze(src: &str) -> route_asset_analyzer::Analysis {
    analyze_source(src, None, ParseSyntax::Ecma).unwrap()
}

#[test]
fn test_end_to_end_scenario() {
    let analysis = analyze(
        "const routes = [{path:'/home', name:'Home', component: Home}, {path:'/user', name:'Home', meta:{keepAlive:true, flag:'beta'}, children:[{path:'/user/list', name:'UserList'}]}];",
    );
    let summary = &analysis.summary;

    assert!(analysis.routes_found);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.named, 3);
    assert_eq!(
        summary.name_count_map.iter().collect::<Vec<_>>(),
        vec![("Home", 2), ("UserList", 1)]
    );
    assert_eq!(summary.with_keep_alive, 1);
    assert_eq!(
        summary.flags,
        vec![FlaggedRoute {
            path: Some("/user".into()),
            flag: MetaValue::Text("beta".into()),
        }]
    );
    assert_eq!(
        summary.prefix_map.iter().collect::<Vec<_>>(),
        vec![("home", 1), ("user", 2)]
    );
    assert_eq!(summary.type_map.paths(RouteKind::List), ["/user/list"]);
}

#[test]
fn test_vue_router_module() {
    let analysis = analyze(VUE_ROUTER);
    let summary = &analysis.summary;

    let paths: Vec<&str> = analysis
        .routes
        .iter()
        .filter_map(|r| r.path.as_deref())
        .collect();
    assert_eq!(
        paths,
        vec![
            "/",
            "/home",
            "/user",
            "/user/list",
            "/user/detail/:id",
            "/user/edit-detail/:id",
            "/goods",
            "/goods/add",
            "/goods/view",
            "*",
        ]
    );

    assert_eq!(summary.total, 10);
    assert_eq!(summary.named, 6);
    assert_eq!(summary.unnamed, 4);
    assert_eq!(summary.with_keep_alive, 1);
    assert_eq!(summary.dynamic_component, 1);
    assert_eq!(summary.has_props, 1);
    assert_eq!(summary.duplicate_names().collect::<Vec<_>>(), vec![("Home", 2)]);
    assert_eq!(summary.reused_components().collect::<Vec<_>>(), vec![("Layout", 2)]);
    assert_eq!(summary.component_count_map.get("@/views/user/list.vue"), 1);
    assert_eq!(
        summary.prefix_map.iter().collect::<Vec<_>>(),
        vec![("/", 2), ("home", 1), ("user", 4), ("goods", 3)]
    );
    assert_eq!(summary.type_map.paths(RouteKind::Detail), [
        "/user/detail/:id",
        "/user/edit-detail/:id"
    ]);
    assert_eq!(summary.type_map.paths(RouteKind::Edit), ["/user/edit-detail/:id"]);
    assert_eq!(summary.type_map.paths(RouteKind::Add), ["/goods/add"]);
    assert_eq!(summary.type_map.paths(RouteKind::View), ["/goods/view"]);
}

#[test]
fn test_counts_are_consistent() {
    for src in [
        VUE_ROUTER,
        "const routes = [];",
        "const routes = [{}, { name: 'a' }, 1, { children: [{ name: 'b' }, {}] }];",
    ] {
        let analysis = analyze(src);
        let summary = &analysis.summary;
        assert_eq!(summary.total, analysis.routes.len());
        assert_eq!(summary.named + summary.unnamed, summary.total);
        let prefixed: usize = summary.prefix_map.iter().map(|(_, count)| count).sum();
        assert_eq!(prefixed, summary.total);
    }
}

#[test]
fn test_descendants_are_contiguous() {
    let analysis = analyze(VUE_ROUTER);
    let index_of = |path: &str| {
        analysis
            .routes
            .iter()
            .position(|r| r.path.as_deref() == Some(path))
            .unwrap()
    };

    let user = index_of("/user");
    let goods = index_of("/goods");
    for child in ["/user/list", "/user/detail/:id", "/user/edit-detail/:id"] {
        let idx = index_of(child);
        assert!(user < idx && idx < goods, "{child} at {idx}");
    }
    assert_eq!(index_of("/goods/add"), goods + 1);
    assert_eq!(index_of("*"), index_of("/goods/view") + 1);
}

#[test]
fn test_idempotent_extraction() {
    assert_eq!(analyze(VUE_ROUTER), analyze(VUE_ROUTER));
}

#[test]
fn test_missing_routes_binding() {
    let analysis = analyze("const appRoutes = [{ path: '/' }]; export default appRoutes;");
    assert!(!analysis.routes_found);
    assert!(analysis.routes.is_empty());
    assert_eq!(analysis.summary.total, 0);
    assert_eq!(analysis.summary.named, 0);
    assert!(analysis.summary.prefix_map.is_empty());
}

#[test]
fn test_syntax_error_is_fatal() {
    let err = analyze_source("const routes = [{ path: '/' }", None, ParseSyntax::Ecma).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_typescript_router_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("routes.ts");
    fs::write(
        &path,
        indoc! {r#"
            import type { RouteRecordRaw } from 'vue-router'

            export const routes: RouteRecordRaw[] = [
              { path: '/orders', name: 'OrderList', component: () => import('./views/OrderList.vue') },
              { path: '/orders/:id', name: 'OrderDetail', component: OrderDetail as any, props: true },
            ]
        "#},
    )
    .unwrap();

    let analysis = analyze_file(&path, ParseSyntax::for_path(&path)).unwrap();
    assert_eq!(analysis.summary.total, 2);
    assert_eq!(
        analysis.routes[0].component.as_deref(),
        Some("./views/OrderList.vue")
    );
    assert_eq!(analysis.routes[1].component.as_deref(), Some("OrderDetail"));
    assert_eq!(analysis.summary.has_props, 1);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = analyze_file(&dir.path().join("index.js"), ParseSyntax::Ecma).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[test]
fn test_directory_input_is_resolved() {
    let dir = TempDir::new().unwrap();
    let router = dir.path().join("src/router/index.js");
    fs::create_dir_all(router.parent().unwrap()).unwrap();
    fs::write(&router, VUE_ROUTER).unwrap();

    let input = AnalyzeOptions::new(dir.path()).resolve_input().unwrap();
    assert_eq!(input, router);
    let analysis = analyze_file(&input, ParseSyntax::for_path(&input)).unwrap();
    assert_eq!(analysis.summary.total, 10);
}

#[test]
fn test_json_report_shape() {
    let analysis = analyze(
        "const routes = [{ path: '/a', name: 'A', meta: { keepAlive: true, flag: 'x' }, props: true }];",
    );
    let text = route_asset_analyzer::report::render_json(&analysis).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(
        value["routeItems"],
        json!([{
            "path": "/a",
            "name": "A",
            "meta": { "keepAlive": true, "flag": "x" },
            "hasProps": true
        }])
    );
    assert_eq!(value["summary"]["flags"], json!([{ "path": "/a", "flag": "x" }]));
    assert_eq!(value["summary"]["hasProps"], 1);
    assert_eq!(value["summary"]["typeMap"]["list"], json!([]));
}
