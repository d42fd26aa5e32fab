/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug, Clone)]
enum RandomCommand {
    Bits(u128, usize),
    Unary(u64),
    Gamma(u64),
    Delta(u64),
    Omega(u64),
    Fibonacci(u64),
    Zeta(u64, u64),
    Bl(u64, u32),
}

/// Encodes the command list into one MSB-first and one LSB-first buffer,
/// then decodes everything back and checks values and bit counts.
pub fn harness(data: FuzzCase) {
    let mut data = data;
    for command in &mut data.commands {
        match command {
            RandomCommand::Bits(value, n_bits) => {
                *n_bits = 1 + (*n_bits % 127);
                *value &= (1u128 << *n_bits) - 1;
            }
            RandomCommand::Unary(value) => {
                *value = (*value % 300).max(1);
            }
            RandomCommand::Gamma(value)
            | RandomCommand::Delta(value)
            | RandomCommand::Omega(value)
            | RandomCommand::Fibonacci(value) => {
                *value = (*value).max(1);
            }
            RandomCommand::Zeta(value, k) => {
                *value = (*value).max(1);
                *k = (*k % 7).max(1);
            }
            RandomCommand::Bl(value, s) => {
                *value = (*value).max(1);
                *s %= 8;
            }
        };
    }

    let mut msb = VecBuffer::<u64, Msb0>::new();
    let mut lsb = VecBuffer::<u64, Lsb0>::new();
    let mut lens = Vec::new();
    for command in data.commands.iter() {
        let (a, b) = match command {
            RandomCommand::Bits(value, n_bits) => {
                msb.append_bits(*value, *n_bits);
                lsb.append_bits(*value, *n_bits);
                (*n_bits, *n_bits)
            }
            RandomCommand::Unary(value) => (msb.write_unary(*value), lsb.write_unary(*value)),
            RandomCommand::Gamma(value) => (
                msb.write_gamma(*value).unwrap(),
                lsb.write_gamma(*value).unwrap(),
            ),
            RandomCommand::Delta(value) => (
                msb.write_delta(*value).unwrap(),
                lsb.write_delta(*value).unwrap(),
            ),
            RandomCommand::Omega(value) => (
                msb.write_omega(*value).unwrap(),
                lsb.write_omega(*value).unwrap(),
            ),
            RandomCommand::Fibonacci(value) => (
                msb.write_fibonacci(*value).unwrap(),
                lsb.write_fibonacci(*value).unwrap(),
            ),
            RandomCommand::Zeta(value, k) => (
                msb.write_zeta(*value, *k).unwrap(),
                lsb.write_zeta(*value, *k).unwrap(),
            ),
            RandomCommand::Bl(value, s) => (
                msb.write_bl(*value, *s).unwrap(),
                lsb.write_bl(*value, *s).unwrap(),
            ),
        };
        assert_eq!(a, b);
        lens.push(a);
    }
    assert_eq!(msb.num_bits(), lsb.num_bits());

    let mut pos = 0;
    for (command, len) in data.commands.iter().zip(lens) {
        match command {
            RandomCommand::Bits(value, n_bits) => {
                assert_eq!(msb.get_bits(*n_bits, pos).unwrap(), *value);
                assert_eq!(lsb.get_bits(*n_bits, pos).unwrap(), *value);
            }
            RandomCommand::Unary(value) => {
                assert_eq!(msb.read_unary(pos).unwrap(), (*value, len));
                assert_eq!(lsb.read_unary(pos).unwrap(), (*value, len));
            }
            RandomCommand::Gamma(value) => {
                assert_eq!(msb.read_gamma::<u64>(pos).unwrap(), (*value, len));
                assert_eq!(lsb.read_gamma::<u64>(pos).unwrap(), (*value, len));
                assert_eq!(len, len_gamma(*value));
            }
            RandomCommand::Delta(value) => {
                assert_eq!(msb.read_delta::<u64>(pos).unwrap(), (*value, len));
                assert_eq!(lsb.read_delta::<u64>(pos).unwrap(), (*value, len));
                assert_eq!(len, len_delta(*value));
            }
            RandomCommand::Omega(value) => {
                assert_eq!(msb.read_omega::<u64>(pos).unwrap(), (*value, len));
                assert_eq!(lsb.read_omega::<u64>(pos).unwrap(), (*value, len));
                assert_eq!(len, len_omega(*value));
            }
            RandomCommand::Fibonacci(value) => {
                assert_eq!(msb.read_fibonacci::<u64>(pos).unwrap(), (*value, len));
                assert_eq!(lsb.read_fibonacci::<u64>(pos).unwrap(), (*value, len));
                assert_eq!(len, len_fibonacci(*value));
            }
            RandomCommand::Zeta(value, k) => {
                assert_eq!(msb.read_zeta::<u64>(pos, *k).unwrap(), (*value, len));
                assert_eq!(lsb.read_zeta::<u64>(pos, *k).unwrap(), (*value, len));
                assert_eq!(len, len_zeta(*value, *k));
            }
            RandomCommand::Bl(value, s) => {
                assert_eq!(msb.read_bl::<u64>(pos, *s).unwrap(), (*value, len));
                assert_eq!(lsb.read_bl::<u64>(pos, *s).unwrap(), (*value, len));
                assert_eq!(len, len_bl(*value, *s));
            }
        };
        pos += len;
    }
    assert_eq!(pos, msb.num_bits());
}
