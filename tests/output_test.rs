// Integration tests for the printed demonstration

use primsize::console::Console;
use primsize::demo::Demo;

fn expected_output() -> String {
    format!(
        "Integer (int): 4\n\
         Size: 4 bytes\n\
         \n\
         Float: 4.5\n\
         Size: 4 bytes\n\
         \n\
         Double: 434.4343\n\
         Size: 8 bytes\n\
         \n\
         Boolean: true\n\
         Size: 1 bytes\n\
         \n\
         Character: A\n\
         ASCII value: 65\n\
         Size: 1 bytes\n\
         \n\
         Long Long: 9876543210\n\
         Size: 8 bytes\n\
         \n\
         Short: 32767\n\
         Size: 2 bytes\n\
         \n\
         String: Mercury-CPP\n\
         Size: {} bytes\n",
        std::mem::size_of::<String>()
    )
}

#[test]
fn test_output_matches_byte_for_byte() {
    let demo = Demo::new().expect("Declaring locals failed");
    let output = demo.render().expect("Rendering failed");

    assert_eq!(output, expected_output());
}

#[test]
fn test_console_capture_matches_render() {
    let demo = Demo::new().expect("Declaring locals failed");
    let mut console = Console::new();
    demo.run(&mut console).expect("Run failed");

    let mut stdout_bytes = Vec::new();
    console.flush_to(&mut stdout_bytes).expect("Flush failed");

    assert_eq!(String::from_utf8(stdout_bytes).unwrap(), expected_output());
}

#[test]
fn test_sections_are_separated_by_one_blank_line() {
    let demo = Demo::new().expect("Declaring locals failed");
    let mut console = Console::new();
    demo.run(&mut console).expect("Run failed");

    let lines = console.get_output();
    let blanks = lines.iter().filter(|l| l.is_empty()).count();
    assert_eq!(blanks, 7);
    assert!(!lines.windows(2).any(|w| w[0].is_empty() && w[1].is_empty()));
    assert_eq!(lines.first().map(String::as_str), Some("Integer (int): 4"));
    assert!(lines.last().is_some_and(|l| l.starts_with("Size: ")));
}

#[test]
fn test_running_twice_is_identical() {
    let demo = Demo::new().expect("Declaring locals failed");
    assert_eq!(demo.render().unwrap(), demo.render().unwrap());
}
