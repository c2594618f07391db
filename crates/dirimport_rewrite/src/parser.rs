use anyhow::{Result, anyhow};
use dirimport_core::{ImportRequest, ImportSpecifier};
use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::{
    BindingIdentifier, IdentifierReference, ImportDeclaration, ImportDeclarationSpecifier,
    LabelIdentifier, ModuleExportName, Statement,
};
use oxc_ast_visit::Visit;
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::{collections::HashSet, path::Path};

/// A top-level import declaration and where it sits in the source text.
#[derive(Debug, Clone)]
pub struct LocatedImport {
    pub start: u32,
    pub end: u32,
    pub request: ImportRequest,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedModule {
    pub imports: Vec<LocatedImport>,
    /// Every identifier the program binds, references or labels
    pub identifiers: HashSet<String>,
}

#[derive(Default)]
struct IdentifierCollector {
    names: HashSet<String>,
}

impl<'a> Visit<'a> for IdentifierCollector {
    fn visit_binding_identifier(&mut self, it: &BindingIdentifier<'a>) {
        self.names.insert(it.name.to_string());
    }

    fn visit_identifier_reference(&mut self, it: &IdentifierReference<'a>) {
        self.names.insert(it.name.to_string());
    }

    fn visit_label_identifier(&mut self, it: &LabelIdentifier<'a>) {
        self.names.insert(it.name.to_string());
    }
}

pub fn parse_module(path: &Path, source: &str) -> Result<ParsedModule> {
    trace!("Parsing {}", path.display());
    let st = source_type_for(path);
    let allocator = Allocator::default();
    let ParserReturn { program, errors, panicked, .. } =
        OxcParser::new(&allocator, source, st).parse();

    if panicked || !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return Err(anyhow!("Failed to parse {}: {}", path.display(), messages.join("; ")));
    }

    let mut collector = IdentifierCollector::default();
    collector.visit_program(&program);

    let mut imports = Vec::new();
    for stmt in &program.body {
        let Statement::ImportDeclaration(decl) = stmt else { continue };

        // Erased by TypeScript, never a runtime module
        if decl.import_kind.is_type() {
            trace!("Skipping type-only import '{}' in {}", decl.source.value, path.display());
            continue;
        }

        let request = import_request(path, decl);
        // `import { type A, type B }` is elided just like `import type`
        if request.specifiers.is_empty() && decl.specifiers.as_ref().is_some_and(|s| !s.is_empty()) {
            trace!("Skipping import of types only '{}' in {}", decl.source.value, path.display());
            continue;
        }

        imports.push(LocatedImport { start: decl.span.start, end: decl.span.end, request });
    }

    debug!(
        "Found {} imports and {} identifiers in {}",
        imports.len(),
        collector.names.len(),
        path.display()
    );
    Ok(ParsedModule { imports, identifiers: collector.names })
}

fn import_request(path: &Path, decl: &ImportDeclaration) -> ImportRequest {
    let specifiers = decl
        .specifiers
        .iter()
        .flatten()
        .filter_map(|spec| match spec {
            ImportDeclarationSpecifier::ImportSpecifier(s) if s.import_kind.is_type() => None,
            ImportDeclarationSpecifier::ImportSpecifier(s) => Some(ImportSpecifier::Named {
                imported: export_name(&s.imported),
                local: s.local.name.to_string(),
            }),
            ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => {
                Some(ImportSpecifier::Default { local: s.local.name.to_string() })
            }
            ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => {
                Some(ImportSpecifier::Namespace { local: s.local.name.to_string() })
            }
        })
        .collect();

    ImportRequest {
        source: decl.source.value.to_string(),
        specifiers,
        importer: path.to_path_buf(),
    }
}

fn export_name(name: &ModuleExportName) -> String {
    match name {
        ModuleExportName::IdentifierName(id) => id.name.to_string(),
        ModuleExportName::IdentifierReference(id) => id.name.to_string(),
        ModuleExportName::StringLiteral(s) => s.value.to_string(),
    }
}

pub(crate) fn source_type_for(path: &Path) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());

    // Import declarations only exist in modules, whatever the extension says
    SourceType::default()
        .with_module(true)
        .with_jsx(matches!(ext, Some("tsx") | Some("jsx") | Some("js") | Some("es") | Some("es6")))
        .with_typescript(matches!(ext, Some("ts") | Some("tsx") | Some("mts") | Some("cts")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(name: &str, source: &str) -> ParsedModule {
        parse_module(&PathBuf::from("/project/src").join(name), source).unwrap()
    }

    #[test]
    fn test_default_import() {
        let module = parse("index.js", "import X from './dir';");
        assert_eq!(module.imports.len(), 1);
        let import = &module.imports[0];
        assert_eq!(import.start, 0);
        assert_eq!(import.end, 22);
        assert_eq!(import.request.source, "./dir");
        assert_eq!(import.request.importer, PathBuf::from("/project/src/index.js"));
        assert_eq!(import.request.specifiers, vec![ImportSpecifier::Default { local: "X".into() }]);
    }

    #[test]
    fn test_specifier_shapes() {
        let module = parse(
            "index.js",
            "import D, { a, b as c, 'd-e' as f } from './dir/*';\nimport * as ns from './other/**';",
        );
        assert_eq!(module.imports.len(), 2);
        assert_eq!(
            module.imports[0].request.specifiers,
            vec![
                ImportSpecifier::Default { local: "D".into() },
                ImportSpecifier::Named { imported: "a".into(), local: "a".into() },
                ImportSpecifier::Named { imported: "b".into(), local: "c".into() },
                ImportSpecifier::Named { imported: "d-e".into(), local: "f".into() },
            ]
        );
        assert_eq!(module.imports[1].request.source, "./other/**");
        assert_eq!(
            module.imports[1].request.specifiers,
            vec![ImportSpecifier::Namespace { local: "ns".into() }]
        );
    }

    #[test]
    fn test_side_effect_import_has_no_specifiers() {
        let module = parse("index.js", "import './polyfills';");
        assert_eq!(module.imports.len(), 1);
        assert!(module.imports[0].request.specifiers.is_empty());
    }

    #[test]
    fn test_type_only_import_skipped() {
        let module = parse("index.ts", "import type { Foo } from './types';\nimport { bar } from './bar';");
        assert_eq!(module.imports.len(), 1);
        assert_eq!(module.imports[0].request.source, "./bar");
    }

    #[test]
    fn test_inline_type_specifiers_skipped() {
        let module = parse(
            "index.ts",
            "import { a, type Shape } from './dir';\nimport { type Only } from './types';",
        );
        assert_eq!(module.imports.len(), 1);
        assert_eq!(module.imports[0].request.source, "./dir");
        assert_eq!(
            module.imports[0].request.specifiers,
            vec![ImportSpecifier::Named { imported: "a".into(), local: "a".into() }]
        );
    }

    #[test]
    fn test_nested_and_dynamic_imports_ignored() {
        let module = parse("index.js", "const m = import('./lazy');\nfunction f() { return require('./dir'); }");
        assert!(module.imports.is_empty());
    }

    #[test]
    fn test_identifiers_collected() {
        let module = parse(
            "index.jsx",
            "import React from 'react';\nconst _a = 1;\nouter: for (const x of y) { break outer; }\nexport const el = <div />;",
        );
        for name in ["React", "_a", "outer", "x", "y", "el"] {
            assert!(module.identifiers.contains(name), "missing identifier '{}'", name);
        }
    }

    #[test]
    fn test_syntax_error_is_fatal() {
        let result = parse_module(Path::new("/project/src/broken.js"), "import { from './dir';");
        assert!(result.is_err());
    }
}
