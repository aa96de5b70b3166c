use byte_ring::RingBuffer;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Op {
    Write(Vec<u8>),
    Read(usize),
    Peek(usize),
    Skip(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => prop::collection::vec(any::<u8>(), 0..24).prop_map(Op::Write),
        4 => (0usize..24).prop_map(Op::Read),
        1 => (0usize..24).prop_map(Op::Peek),
        1 => (0usize..24).prop_map(Op::Skip),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every transfer matches a `VecDeque` doing the same thing.
    #[test]
    fn prop_matches_deque_model(
        capacity in 1usize..16,
        ops in prop::collection::vec(op(), 1..64),
    ) {
        let mut buf = RingBuffer::new(capacity);
        let mut model: VecDeque<u8> = VecDeque::new();

        for op in ops {
            match op {
                Op::Write(data) => {
                    let expected = data.len().min(capacity - model.len());
                    let written = buf.write(&data);
                    if expected == 0 {
                        prop_assert_eq!(written, None);
                    } else {
                        prop_assert_eq!(written, Some(expected));
                    }
                    model.extend(&data[..expected]);
                }
                Op::Read(n) => {
                    let expected = n.min(model.len());
                    let mut out = vec![0u8; n];
                    let read = buf.read(&mut out);
                    if expected == 0 {
                        prop_assert_eq!(read, None);
                    } else {
                        prop_assert_eq!(read, Some(expected));
                    }
                    let want: Vec<u8> = model.drain(..expected).collect();
                    prop_assert_eq!(&out[..expected], &want[..]);
                }
                Op::Peek(n) => {
                    let expected = n.min(model.len());
                    let mut out = vec![0u8; n];
                    prop_assert_eq!(buf.peek(&mut out).unwrap_or(0), expected);
                    let want: Vec<u8> = model.iter().take(expected).copied().collect();
                    prop_assert_eq!(&out[..expected], &want[..]);
                }
                Op::Skip(n) => {
                    let expected = n.min(model.len());
                    prop_assert_eq!(buf.skip(n), expected);
                    model.drain(..expected);
                }
                Op::Clear => {
                    buf.clear();
                    model.clear();
                }
            }

            prop_assert!(buf.len() <= buf.capacity());
            prop_assert_eq!(buf.len(), model.len());
            prop_assert_eq!(buf.is_empty(), model.is_empty());
            prop_assert_eq!(buf.is_full(), model.len() == capacity);
            prop_assert_eq!(buf.available_space(), capacity - model.len());

            let (head, tail) = buf.as_slices();
            let contents: Vec<u8> = head.iter().chain(tail).copied().collect();
            let want: Vec<u8> = model.iter().copied().collect();
            prop_assert_eq!(contents, want);
        }
    }

    /// A write followed by a read hands back a prefix of what was written.
    #[test]
    fn prop_write_then_read_is_fifo(
        capacity in 1usize..32,
        offset in 0usize..32,
        data in prop::collection::vec(any::<u8>(), 1..48),
        read_len in 1usize..48,
    ) {
        let mut buf = RingBuffer::new(capacity);

        // Park both cursors at an arbitrary slot first
        let offset = offset % capacity;
        if offset > 0 {
            buf.write(&vec![0u8; offset]).unwrap();
            prop_assert_eq!(buf.skip(offset), offset);
        }

        let written = buf.write(&data).unwrap();
        prop_assert_eq!(written, data.len().min(capacity));

        let mut out = vec![0u8; read_len];
        let read = buf.read(&mut out).unwrap();
        prop_assert_eq!(read, read_len.min(written));
        prop_assert_eq!(&out[..read], &data[..read]);
        prop_assert_eq!(buf.len(), written - read);
    }
}
