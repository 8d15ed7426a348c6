#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let args: Vec<&str> = content.split('\0').collect();
    let routed = elm_live::route(&args);

    let total = routed.tool_args.len()
        + routed.compiler_args_before_separator.len()
        + routed.compiler_args_after_separator.len();
    let separators = usize::from(args.contains(&"--"));
    assert_eq!(total + separators, args.len());

    let _ = elm_live::cli::ToolOptions::from_tool_args(&routed.tool_args);
});
