use tempfile::TempDir;

use super::*;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn project(dir: &TempDir) -> ProjectConfig {
    write(dir, "tsconfig.json", r#"{"compilerOptions": {"target": "es2019"}}"#);
    ProjectConfig::discover(dir.path()).unwrap()
}

#[test]
fn build_program_indexes_declarations_across_files() {
    let temp_dir = TempDir::new().unwrap();
    let project = project(&temp_dir);
    let user = write(&temp_dir, "user.ts", "export class User {}\n");
    let repo = write(&temp_dir, "repo.ts", "export interface Repo {}\n");

    let program = build_program(&project, &[user.clone(), repo.clone()]).unwrap();
    assert!(program.resolve_file(&user).is_some());
    assert!(program.resolve_file(&repo).is_some());
    assert_eq!(program.target(), LanguageTarget::Es2019);

    let checker = program.type_checker();
    let user_decls = checker.declarations_of(&Symbol::reference("User"));
    assert_eq!(user_decls[0].class_name(), Some("User"));
    assert_eq!(user_decls[0].file.as_deref(), Some(user.as_path()));
}

#[test]
fn resolve_file_matches_exact_path() {
    let temp_dir = TempDir::new().unwrap();
    let project = project(&temp_dir);
    let a = write(&temp_dir, "a.ts", "class A {}\n");

    let program = build_program(&project, std::slice::from_ref(&a)).unwrap();
    assert!(program.resolve_file(&a).is_some());
    assert!(program.resolve_file(&temp_dir.path().join("b.ts")).is_none());
}

#[test]
fn build_program_fails_for_missing_files() {
    let temp_dir = TempDir::new().unwrap();
    let project = project(&temp_dir);

    let err = build_program(&project, &[temp_dir.path().join("gone.ts")]).unwrap_err();
    assert!(matches!(err, ArtieError::Program(_)));
    assert!(err.to_string().contains("gone.ts"));
}

#[test]
fn empty_program_has_no_files() {
    let temp_dir = TempDir::new().unwrap();
    let project = project(&temp_dir);

    let program = build_program(&project, &[]).unwrap();
    assert!(program.resolve_file(&temp_dir.path().join("a.ts")).is_none());
}

#[test]
fn later_parse_of_the_same_path_replaces_the_earlier_one() {
    let path = Path::new("/src/a.ts");
    let first = parse_source("class First {}\n", path).unwrap();
    let second = parse_source("class Second {}\n", path).unwrap();

    let program = Program::from_parsed(vec![first, second], LanguageTarget::default());
    let file = program.resolve_file(path).unwrap();
    assert_eq!(file.classes[0].name.as_deref(), Some("Second"));
}
