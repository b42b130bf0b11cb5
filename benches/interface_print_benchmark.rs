use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io;
use teeprint::log::{LogSink, PrintOptions, Printer, WriterDestination};

/// 创建 benchmark 用的 printer，控制台与日志两端都写入 io::sink
fn create_benchmark_printer(flush_after_log: bool) -> Printer<io::Sink> {
    let mut sink = LogSink::with_destination(WriterDestination::new(io::sink()));
    sink.set_flush_after_log(flush_after_log);
    Printer::new(io::sink(), sink)
}

fn benchmark_basic_print(c: &mut Criterion) {
    let mut group = c.benchmark_group("interface_print");

    for flush_after_log in [false, true] {
        let mut printer = create_benchmark_printer(flush_after_log);
        group.bench_function(format!("flush_after_log={}", flush_after_log), |b| {
            b.iter(|| printer.print(black_box("Simple log message")))
        });
    }

    group.finish();
}

fn benchmark_different_message_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_sizes");
    let options = PrintOptions::default();

    for size in [10, 100, 1000, 10000].iter() {
        let message = "x".repeat(*size);
        let mut printer = create_benchmark_printer(true);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, message| {
            b.iter(|| printer.print_with(black_box(message), &options))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_basic_print, benchmark_different_message_sizes);
criterion_main!(benches);
