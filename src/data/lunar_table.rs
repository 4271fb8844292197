// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Korean lunisolar month table for lunar years 1900–2050.
//!
//! One row per lunar year: the solar date of the first day of month 1,
//! a 13-bit month-length mask (most significant bit is the first ordinal
//! month, a set bit marks a 30-day month) and the ordinal position of the
//! leap month, `0` when the year has none. A leap month at ordinal `n`
//! repeats month `n - 1`.

/// Lunar year of the first row of [`LUNAR_TABLE`].
pub(crate) const FIRST_YEAR: i32 = 1900;

#[rustfmt::skip]
pub(crate) const LUNAR_TABLE: [(i32, u32, u32, u16, u8); 151] = [
    (1900, 1, 31, 0b0_1001_0110_1101,  9),
    (1901, 2, 19, 0b0_1001_0101_1100,  0),
    (1902, 2,  8, 0b1_0100_1010_1110,  0),
    (1903, 1, 29, 0b0_1010_0100_1101,  6),
    (1904, 2, 16, 0b1_1010_0100_1100,  0),
    (1905, 2,  4, 0b1_1011_0010_1010,  0),
    (1906, 1, 25, 0b0_1101_0101_0101,  5),
    (1907, 2, 13, 0b0_1010_1101_0100,  0),
    (1908, 2,  2, 0b1_0011_0101_1010,  0),
    (1909, 1, 22, 0b0_1001_0101_1101,  3),
    (1910, 2, 10, 0b0_1001_0101_1100,  0),
    (1911, 1, 30, 0b1_0100_1001_1011,  7),
    (1912, 2, 18, 0b1_0100_1001_1010,  0),
    (1913, 2,  6, 0b1_1010_0100_1010,  0),
    (1914, 1, 26, 0b1_1011_0010_1001,  6),
    (1915, 2, 14, 0b1_0110_1010_1010,  0),
    (1916, 2,  4, 0b0_1010_1101_0100,  0),
    (1917, 1, 23, 0b1_0010_1101_1010,  3),
    (1918, 2, 11, 0b1_0010_1011_1010,  0),
    (1919, 2,  1, 0b0_1001_0101_1011,  8),
    (1920, 2, 20, 0b0_1001_0011_0110,  0),
    (1921, 2,  8, 0b1_0100_1001_0110,  0),
    (1922, 1, 28, 0b1_0110_0100_1011,  6),
    (1923, 2, 16, 0b0_1101_0101_0010,  0),
    (1924, 2,  5, 0b1_0101_1010_1000,  0),
    (1925, 1, 24, 0b1_0110_1011_0101,  5),
    (1926, 2, 13, 0b0_0101_0110_1100,  0),
    (1927, 2,  2, 0b1_0010_1011_0110,  0),
    (1928, 1, 23, 0b0_1001_0011_0111,  3),
    (1929, 2, 10, 0b0_1001_0010_1110,  0),
    (1930, 1, 30, 0b0_1100_1001_0110,  7),
    (1931, 2, 17, 0b1_1100_1001_0100,  0),
    (1932, 2,  6, 0b1_1101_0100_1010,  0),
    (1933, 1, 26, 0b0_1101_1010_1001,  6),
    (1934, 2, 14, 0b0_1011_0110_1010,  0),
    (1935, 2,  4, 0b0_0101_0110_1100,  0),
    (1936, 1, 24, 0b1_0010_1010_1110,  4),
    (1937, 2, 11, 0b1_0010_0101_1100,  0),
    (1938, 1, 31, 0b1_1001_0010_1101,  8),
    (1939, 2, 19, 0b1_1001_0010_1010,  0),
    (1940, 2,  8, 0b1_1010_1001_0100,  0),
    (1941, 1, 27, 0b1_1011_0100_1010,  7),
    (1942, 2, 15, 0b1_0110_1101_0010,  0),
    (1943, 2,  5, 0b0_1010_1101_1010,  0),
    (1944, 1, 26, 0b0_0101_0101_1011,  5),
    (1945, 2, 13, 0b0_0100_1011_1010,  0),
    (1946, 2,  2, 0b1_0010_0101_1010,  0),
    (1947, 1, 22, 0b1_1001_0010_1011,  3),
    (1948, 2, 10, 0b1_0101_0010_1010,  0),
    (1949, 1, 29, 0b1_1010_1001_0101,  8),
    (1950, 2, 17, 0b1_0110_1001_0100,  0),
    (1951, 2,  6, 0b1_0110_1010_1010,  0),
    (1952, 1, 27, 0b0_1010_1101_0101,  6),
    (1953, 2, 14, 0b0_1001_1011_0110,  0),
    (1954, 2,  4, 0b0_0100_1011_0110,  0),
    (1955, 1, 24, 0b1_0010_0101_0111,  4),
    (1956, 2, 12, 0b0_1010_0101_0110,  0),
    (1957, 1, 31, 0b1_0101_0010_1011,  9),
    (1958, 2, 19, 0b0_1101_0010_1010,  0),
    (1959, 2,  8, 0b0_1101_0101_0100,  0),
    (1960, 1, 28, 0b1_0101_1010_1010,  7),
    (1961, 2, 15, 0b1_0101_0110_1010,  0),
    (1962, 2,  5, 0b0_1001_0110_1100,  0),
    (1963, 1, 25, 0b1_0100_1010_1110,  5),
    (1964, 2, 13, 0b1_0100_1010_1110,  0),
    (1965, 2,  2, 0b0_1010_0100_1110,  0),
    (1966, 1, 22, 0b0_1101_0010_0110,  4),
    (1967, 2,  9, 0b1_1011_0010_1010,  0),
    (1968, 1, 30, 0b0_1101_0101_0101,  8),
    (1969, 2, 17, 0b0_1010_1101_0100,  0),
    (1970, 2,  6, 0b1_0011_0101_1010,  0),
    (1971, 1, 27, 0b0_1001_0101_1101,  6),
    (1972, 2, 15, 0b0_1001_0101_1100,  0),
    (1973, 2,  3, 0b1_0100_1001_1100,  0),
    (1974, 1, 23, 0b1_1010_0100_1101,  5),
    (1975, 2, 11, 0b1_1010_0100_1010,  0),
    (1976, 1, 31, 0b1_1010_1010_1001,  9),
    (1977, 2, 18, 0b1_0110_1010_1000,  0),
    (1978, 2,  7, 0b1_1010_1101_0100,  0),
    (1979, 1, 28, 0b1_0010_1101_1010,  7),
    (1980, 2, 16, 0b1_0010_1011_0110,  0),
    (1981, 2,  5, 0b0_1001_0011_0110,  0),
    (1982, 1, 25, 0b1_0100_1001_1011,  5),
    (1983, 2, 13, 0b1_0100_1001_0110,  0),
    (1984, 2,  2, 0b1_0110_0100_1011, 11),
    (1985, 2, 20, 0b0_1101_0100_1010,  0),
    (1986, 2,  9, 0b0_1101_1010_1000,  0),
    (1987, 1, 29, 0b1_0110_1011_0101,  7),
    (1988, 2, 18, 0b0_0101_0110_1100,  0),
    (1989, 2,  6, 0b1_0010_1011_0110,  0),
    (1990, 1, 27, 0b0_1001_0011_0111,  6),
    (1991, 2, 15, 0b0_1001_0010_1110,  0),
    (1992, 2,  4, 0b0_1100_1001_0110,  0),
    (1993, 1, 23, 0b0_1101_0100_1010,  4),
    (1994, 2, 10, 0b1_1101_0100_1010,  0),
    (1995, 1, 31, 0b0_1101_1010_1001,  9),
    (1996, 2, 19, 0b0_1011_0101_1010,  0),
    (1997, 2,  8, 0b0_0101_0110_1100,  0),
    (1998, 1, 28, 0b1_0010_0110_1110,  6),
    (1999, 2, 16, 0b1_0010_0101_1100,  0),
    (2000, 2,  5, 0b1_1001_0010_1100,  0),
    (2001, 1, 24, 0b1_1100_1001_0101,  5),
    (2002, 2, 12, 0b1_1010_1001_0100,  0),
    (2003, 2,  1, 0b1_1011_0100_1010,  0),
    (2004, 1, 22, 0b0_1011_0101_0101,  3),
    (2005, 2,  9, 0b0_1010_1101_1000,  0),
    (2006, 1, 29, 0b1_0101_0101_1011,  8),
    (2007, 2, 18, 0b0_0100_1011_1010,  0),
    (2008, 2,  7, 0b1_0010_0101_1010,  0),
    (2009, 1, 26, 0b1_1001_0010_1011,  6),
    (2010, 2, 14, 0b1_0101_0010_1010,  0),
    (2011, 2,  3, 0b1_0110_1001_0100,  0),
    (2012, 1, 23, 0b1_0111_0100_1010,  4),
    (2013, 2, 10, 0b1_0110_1010_1010,  0),
    (2014, 1, 31, 0b0_1010_1011_0101, 10),
    (2015, 2, 19, 0b0_1001_0111_0100,  0),
    (2016, 2,  8, 0b1_0100_1011_0110,  0),
    (2017, 1, 28, 0b0_1010_0101_0111,  6),
    (2018, 2, 16, 0b0_1010_0101_0110,  0),
    (2019, 2,  5, 0b1_0101_0010_1010,  0),
    (2020, 1, 25, 0b1_0110_1001_0101,  5),
    (2021, 2, 12, 0b0_1101_0101_0100,  0),
    (2022, 2,  1, 0b1_0101_1010_1010,  0),
    (2023, 1, 22, 0b0_1010_1011_0101,  3),
    (2024, 2, 10, 0b0_1001_0110_1100,  0),
    (2025, 1, 29, 0b1_0100_1010_1110,  7),
    (2026, 2, 17, 0b1_0100_1010_1110,  0),
    (2027, 2,  7, 0b0_1010_0100_1110,  0),
    (2028, 1, 27, 0b0_1101_0010_0110,  6),
    (2029, 2, 13, 0b1_1011_0010_0110,  0),
    (2030, 2,  3, 0b0_1011_0101_0100,  0),
    (2031, 1, 23, 0b1_0101_0110_1010,  4),
    (2032, 2, 11, 0b1_0010_1101_1010,  0),
    (2033, 1, 31, 0b0_1001_0101_1101, 12),
    (2034, 2, 19, 0b0_1001_0101_1100,  0),
    (2035, 2,  8, 0b1_0100_1001_1010,  0),
    (2036, 1, 28, 0b1_1010_0100_1101,  7),
    (2037, 2, 15, 0b1_1010_0100_1010,  0),
    (2038, 2,  4, 0b1_1010_1010_0100,  0),
    (2039, 1, 24, 0b1_1011_0101_0100,  6),
    (2040, 2, 12, 0b1_0110_1101_0100,  0),
    (2041, 2,  1, 0b1_0010_1101_1010,  0),
    (2042, 1, 22, 0b0_1001_0101_1011,  3),
    (2043, 2, 10, 0b0_1001_0011_0110,  0),
    (2044, 1, 30, 0b1_0100_1001_0111,  8),
    (2045, 2, 17, 0b1_0100_1001_0110,  0),
    (2046, 2,  6, 0b1_0110_0100_1010,  0),
    (2047, 1, 26, 0b1_0110_1010_0101,  6),
    (2048, 2, 14, 0b0_1101_1010_1000,  0),
    (2049, 2,  2, 0b1_0101_1011_0100,  0),
    (2050, 1, 23, 0b1_0010_1011_0110,  4),
];
