// tests/command_tests.rs
//
// Output templates and argument checking for every command family.

use dec::commands::{Arity, STANDARD};
use dec::{compile, ErrorCategory, ErrorKind};

fn render(source: &str) -> String {
    let compilation = compile(source);
    assert!(
        compilation.is_valid(),
        "unexpected diagnostics for {}: {:?}",
        source,
        compilation.messages()
    );
    compilation
        .output()
        .and_then(|o| o.strip_suffix('\n'))
        .unwrap()
        .to_string()
}

fn error_kinds(source: &str) -> Vec<ErrorKind> {
    let compilation = compile(source);
    assert!(compilation.output().is_none());
    compilation.diagnostics.into_iter().map(|d| d.kind).collect()
}

// ---
// Binding and functions
// ---

#[test]
fn test_let_and_set_default_to_zero() {
    assert_eq!(render("(let m)"), "m=0");
    assert_eq!(render("(set a)"), "a\\to 0");
    assert_eq!(render("(set a (add a 1))"), "a\\to \\left(a+1\\right)");
}

#[test]
fn test_multi_letter_names_are_subscripted() {
    assert_eq!(render("(let abc 1)"), "a_{bc}=1");
    assert_eq!(render("(func area (params w h) (mul w h))"), "a_{rea}\\left(w,h\\right)=\\left(w\\cdot h\\right)");
}

#[test]
fn test_subst() {
    assert_eq!(render("(subst f 1 x)"), "f\\left(1,x\\right)");
    assert_eq!(render("(subst f)"), "f\\left(\\right)");
}

#[test]
fn test_func_requires_params() {
    assert_eq!(
        error_kinds("(func f x (mul 2 x))"),
        vec![ErrorKind::ExpectedParams {
            command: "func".into()
        }]
    );
}

#[test]
fn test_name_position_rejects_expressions() {
    let kinds = error_kinds("(let (add 1 2) 3)");
    assert!(matches!(kinds[0], ErrorKind::ExpectedIdentifier { .. }));
}

#[test]
fn test_latex_passes_tokens_through() {
    assert_eq!(
        render("(latex \\theta_{0} (add 1 2))"),
        "\\theta_{0} \\left(1+2\\right)"
    );
    assert_eq!(render("(latex)"), "");
}

// ---
// Arithmetic
// ---

#[test]
fn test_arithmetic_templates() {
    assert_eq!(render("(sub x 1)"), "\\left(x-1\\right)");
    assert_eq!(render("(add)"), "\\left(\\right)");
    assert_eq!(
        render("(pow x 2)"),
        "\\left(\\left(x\\right)^{\\left(2\\right)}\\right)"
    );
    assert_eq!(render("(frac 1 2)"), "\\frac{1}{2}");
    assert_eq!(render("(root x 3)"), "\\sqrt[3]{x}");
    assert_eq!(render("(sqrt 2)"), "\\sqrt{2}");
    assert_eq!(render("(log x 2)"), "\\log_{2}\\left(x\\right)");
    assert_eq!(render("(ln x)"), "\\ln\\left(x\\right)");
    assert_eq!(render("(neg x)"), "\\left(-x\\right)");
    assert_eq!(render("(fact n)"), "\\left(n\\right)!");
}

#[test]
fn test_mul_spacing_after_cdot() {
    assert_eq!(render("(mul 2 (pi))"), "\\left(2\\cdot\\pi\\right)");
    assert_eq!(render("(mul a b)"), "\\left(a\\cdot b\\right)");
    assert_eq!(render("(mul 1.5 -2e3)"), "\\left(1.5\\cdot-2e3\\right)");
}

// ---
// Geometry
// ---

#[test]
fn test_geometry_templates() {
    assert_eq!(render("(point (add x 1) 2)"), "\\left(\\left(x+1\\right),2\\right)");
    assert_eq!(render("(poly A B C)"), "\\operatorname{polygon}\\left(A,B,C\\right)");
    assert_eq!(render("(dist A B)"), "\\operatorname{distance}\\left(A,B\\right)");
    assert_eq!(render("(mid A B)"), "\\operatorname{midpoint}\\left(A,B\\right)");
    assert_eq!(render("(xcoord P)"), "P.x");
    assert_eq!(render("(ycoord (point 1 2))"), "\\left(1,2\\right).y");
}

#[test]
fn test_poly_rejects_constants() {
    let kinds = error_kinds("(poly A (pi) (tau))");
    assert_eq!(kinds.len(), 2);
    assert!(kinds
        .iter()
        .all(|k| k.category() == ErrorCategory::Semantic));
}

#[test]
fn test_action() {
    assert_eq!(
        render("(action (set a 1) (set b (add b 1)))"),
        "a\\to 1,b\\to \\left(b+1\\right)"
    );
    assert_eq!(
        error_kinds("(action 1)"),
        vec![ErrorKind::UnexpectedNumber {
            command: "action".into()
        }]
    );
}

// ---
// Collections and statistics
// ---

#[test]
fn test_collection_templates() {
    assert_eq!(render("(list 1 (ellipsis) 10)"), "\\left[1,...,10\\right]");
    assert_eq!(render("(list)"), "\\left[\\right]");
    assert_eq!(render("(index L 1)"), "L\\left[1\\right]");
    assert_eq!(
        render("(listcomp (list 1 2) n (mul n n))"),
        "\\left[\\left(n\\cdot n\\right)\\operatorname{for}n=\\left[1,2\\right]\\right]"
    );
}

#[test]
fn test_listcomp_takes_exactly_three() {
    let kinds = error_kinds("(listcomp L n n extra)");
    assert_eq!(
        kinds,
        vec![ErrorKind::ArityMismatch {
            command: "listcomp".into(),
            expected: "exactly 3".into(),
            actual: 4
        }]
    );
}

#[test]
fn test_statistics_templates() {
    assert_eq!(render("(len L)"), "\\operatorname{length}\\left(L\\right)");
    assert_eq!(render("(mean 1 2 3)"), "\\operatorname{mean}\\left(1,2,3\\right)");
    assert_eq!(render("(median L)"), "\\operatorname{median}\\left(L\\right)");
    assert_eq!(render("(mad L)"), "\\operatorname{mad}\\left(L\\right)");
    assert_eq!(render("(min a b)"), "\\min\\left(a,b\\right)");
    assert_eq!(render("(max a b)"), "\\max\\left(a,b\\right)");
}

// ---
// Trigonometry and rounding
// ---

#[test]
fn test_trig_templates() {
    assert_eq!(render("(sin x)"), "\\sin\\left(x\\right)");
    assert_eq!(render("(acos x)"), "\\arccos\\left(x\\right)");
    assert_eq!(render("(tanh x)"), "\\tanh\\left(x\\right)");
    assert_eq!(render("(asinh x)"), "\\arcsinh\\left(x\\right)");
    assert_eq!(render("(atan2 y x)"), "\\arctan\\left(y,x\\right)");
    assert_eq!(
        render("(sin (mul 2 x))"),
        "\\sin\\left(\\left(2\\cdot x\\right)\\right)"
    );
    assert_eq!(render("(floor x)"), "\\operatorname{floor}\\left(x\\right)");
    assert_eq!(render("(ceil x)"), "\\operatorname{ceil}\\left(x\\right)");
    assert_eq!(render("(round x)"), "\\operatorname{round}\\left(x\\right)");
}

// ---
// Relations and control
// ---

#[test]
fn test_relations() {
    assert_eq!(render("(eq y (mul 2 x))"), "y=\\left(2\\cdot x\\right)");
    assert_eq!(render("(gt x 0)"), "x>0");
    assert_eq!(render("(lt x 0)"), "x<0");
    assert_eq!(render("(geq x y)"), "x\\ge y");
    assert_eq!(render("(leq 1 2)"), "1\\le2");
}

#[test]
fn test_conditionals() {
    assert_eq!(render("(if (gt x 0) x)"), "x\\left\\{x>0\\right\\}");
    assert_eq!(
        render("(piecewise (lt x 0) (neg x) x)"),
        "\\left\\{x<0:\\left(-x\\right),x\\right\\}"
    );
}

// ---
// Calculus
// ---

#[test]
fn test_calculus_templates() {
    assert_eq!(
        render("(deriv x (mul x x))"),
        "\\frac{d}{dx}\\left(\\left(x\\cdot x\\right)\\right)"
    );
    assert_eq!(render("(int x 0 1 x)"), "\\int_{0}^{1}\\left(x\\right)dx");
    assert_eq!(render("(sum n 1 10 n)"), "\\sum_{n=1}^{10}\\left(n\\right)");
    assert_eq!(render("(prod k 1 n k)"), "\\prod_{k=1}^{n}\\left(k\\right)");
}

// ---
// Constants
// ---

#[test]
fn test_constants() {
    let cases = [
        ("(alpha)", "\\alpha"),
        ("(beta)", "\\beta"),
        ("(theta)", "\\theta"),
        ("(pi)", "\\pi"),
        ("(tau)", "\\tau"),
        ("(phi)", "\\phi"),
        ("(inf)", "\\infty"),
        ("(ninf)", "-\\infty"),
        ("(ellipsis)", "..."),
        ("(empty)", "\\left[\\right]"),
    ];
    for (source, expected) in cases {
        assert_eq!(render(source), expected, "for {}", source);
    }
}

// ---
// Arity checking across the whole registry
// ---

#[test]
fn test_every_command_reports_missing_arguments() {
    for command in STANDARD.list() {
        let min = command.arity.min();
        if min == 0 {
            continue;
        }
        let args = vec!["x"; min - 1].join(" ");
        let source = format!("({} {})", command.name, args);
        let compilation = compile(&source);
        assert!(compilation.output().is_none(), "{} compiled", source);
        assert!(
            compilation
                .diagnostics
                .iter()
                .any(|d| d.category() == ErrorCategory::Arity),
            "no arity error for {}",
            source
        );
    }
}

#[test]
fn test_every_command_accepts_its_minimum() {
    for command in STANDARD.list() {
        let min = command.arity.min();
        let args = vec!["x"; min].join(" ");
        let source = format!("({} {})", command.name, args);
        let compilation = compile(&source);
        assert!(
            compilation
                .diagnostics
                .iter()
                .all(|d| d.category() != ErrorCategory::Arity),
            "spurious arity error for {}",
            source
        );
    }
}

#[test]
fn test_registry_declares_spec_arities() {
    assert_eq!(STANDARD.get("listcomp").unwrap().arity, Arity::Exactly(3));
    assert_eq!(STANDARD.get("int").unwrap().arity, Arity::AtLeast(4));
    assert_eq!(STANDARD.get("atan2").unwrap().arity, Arity::AtLeast(2));
    assert_eq!(STANDARD.get("latex").unwrap().arity, Arity::AtLeast(0));
    assert!(STANDARD.get("nope").is_none());
}
