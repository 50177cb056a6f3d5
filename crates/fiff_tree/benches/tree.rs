use divan::AllocProfiler;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

pub mod build {
    use divan::Bencher;
    use fiff_tree::{
        constants::{block, kind, types},
        types::FileId,
        write::FiffWriterOptions,
        Directory, FiffWriter, Node,
    };
    use std::io::Cursor;

    fn get_input(epochs: usize) -> Vec<u8> {
        let mut fiff = FiffWriter::new(Cursor::new(Vec::new()), FiffWriterOptions::default());
        fiff.start_file(FileId::generate()).unwrap();
        fiff.start_block(block::MEAS).unwrap();
        fiff.write_id(kind::BLOCK_ID, None).unwrap();
        for _ in 0..epochs {
            fiff.start_block(block::EVOKED).unwrap();
            fiff.start_block(block::ASPECT).unwrap();
            fiff.write_raw(300, types::FLOAT, &[0u8; 4096]).unwrap();
            fiff.end_block(block::ASPECT).unwrap();
            fiff.end_block(block::EVOKED).unwrap();
        }
        fiff.end_block(block::MEAS).unwrap();
        fiff.finish().unwrap().into_inner()
    }

    #[divan::bench(args = [10, 1000])]
    fn scan(bencher: Bencher, epochs: usize) {
        bencher
            .with_inputs(|| Cursor::new(get_input(epochs)))
            .bench_local_refs(|data| {
                divan::black_box(Directory::scan(data).unwrap());
            });
    }

    #[divan::bench(args = [10, 1000])]
    fn tree(bencher: Bencher, epochs: usize) {
        let mut data = Cursor::new(get_input(epochs));
        let directory = Directory::scan(&mut data).unwrap();

        bencher.bench_local(move || {
            divan::black_box(Node::build(&mut data, &directory).unwrap().nchild());
        });
    }

    #[divan::bench(args = [10, 1000])]
    fn find(bencher: Bencher, epochs: usize) {
        let mut data = Cursor::new(get_input(epochs));
        let directory = Directory::scan(&mut data).unwrap();
        let tree = Node::build(&mut data, &directory).unwrap();

        bencher.bench_local(|| {
            divan::black_box(tree.find(block::ASPECT).len());
        });
    }
}
