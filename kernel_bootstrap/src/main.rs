#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
// Host test builds only compile the bare-metal pieces for checking
#![cfg_attr(test, allow(dead_code, unused_imports, unused_macros))]

#[cfg(not(test))]
use core::arch::global_asm;
#[cfg(not(test))]
use core::panic::PanicInfo;

use console_vga::{logger, ConsoleLogger, GlobalConsole, TextConsole, VgaColor};
use hal::CpuHal;
use hal_x86_64::{MmioTextBuffer, RealPortIo, X86_64Cpu};
use kernel_bootstrap_lib::greet;
use log::LevelFilter;

/// The one screen
static CONSOLE: GlobalConsole<MmioTextBuffer, RealPortIo> = GlobalConsole::new();

static LOGGER: ConsoleLogger<MmioTextBuffer, RealPortIo> =
    ConsoleLogger::new(&CONSOLE, LevelFilter::Info);

#[cfg(not(test))]
// Provide a small, deterministic stack and jump into Rust.
global_asm!(
    r#"
.section .text.entry, "ax"
.global _start
.extern kernel_main
_start:
    lea rsp, [rip + stack_top]
    and rsp, -16
    call kernel_main
1:
    hlt
    jmp 1b

.section .bss.stack, "aw", @nobits
.align 16
stack_bottom:
    .skip 65536
stack_top:
"#
);

macro_rules! kprint {
    ($($arg:tt)*) => {
        CONSOLE.write_fmt(format_args!($($arg)*))
    };
}

macro_rules! kprintln {
    () => {
        kprint!("\n")
    };
    ($($arg:tt)*) => {
        kprint!("{}\n", format_args!($($arg)*))
    };
}

#[cfg(not(test))]
#[no_mangle]
pub extern "C" fn kernel_main() -> ! {
    // SAFETY: early boot runs identity-mapped and nothing else owns VGA memory.
    let buffer = unsafe { MmioTextBuffer::identity_mapped() };
    CONSOLE.install(TextConsole::new(buffer, RealPortIo::new()));
    CONSOLE.with(greet);
    kprintln!();

    if logger::init(&LOGGER).is_ok() {
        log::info!("console online, {}x{}", console_vga::VGA_WIDTH, console_vga::VGA_HEIGHT);
    }

    X86_64Cpu.halt_loop()
}

#[cfg(not(test))]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    // Skip output if the panic came from inside a console call.
    CONSOLE.try_with(|console| {
        use core::fmt::Write;

        console.set_color(VgaColor::White as u8, VgaColor::Red as u8);
        let _ = writeln!(console, "\nKERNEL PANIC:");
        if let Some(location) = info.location() {
            let _ = writeln!(
                console,
                "  at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            );
        }
        let _ = writeln!(console, "  {}", info.message());
    });
    X86_64Cpu.halt_loop()
}

#[cfg(test)]
fn main() {}
