// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar-term instants for 1900–2050 in Korea Standard Time (UTC+9).
//!
//! Each row holds the 24 terms of one civil year, starting at Sohan
//! (285°) and advancing 15° per entry. Every instant is packed as
//! `MMDD_hhmm` and rounded to the nearest minute.

/// First civil year covered by [`JEOL_TABLE`].
pub(crate) const FIRST_YEAR: i32 = 1900;

/// Last civil year covered by [`JEOL_TABLE`].
pub(crate) const LAST_YEAR: i32 = 2050;

#[rustfmt::skip]
#[allow(clippy::zero_prefixed_literal)]
pub(crate) const JEOL_TABLE: [(i32, [u32; 24]); 151] = [
    (1900, [0106_0304, 0120_2033, 0204_1452, 0219_1101, 0306_0922, 0321_1039, 0405_1453, 0420_2227, 0506_0855, 0521_2217, 0606_1339, 0622_0640, 0708_0010, 0723_1736, 0808_0951, 0824_0020, 0908_1217, 0923_2120, 1009_0313, 1024_0555, 1108_0540, 1123_0248, 1207_2156, 1222_1542]),
    (1901, [0106_0853, 0121_0217, 0204_2040, 0219_1645, 0306_1511, 0321_1624, 0405_2045, 0421_0414, 0506_1451, 0522_0405, 0606_1937, 0622_1228, 0708_0608, 0723_2324, 0808_1546, 0824_0608, 0908_1810, 0924_0309, 1009_0907, 1024_1146, 1108_1135, 1123_0841, 1208_0353, 1222_2137]),
    (1902, [0106_1452, 0121_0812, 0205_0238, 0219_2240, 0306_2108, 0321_2217, 0406_0238, 0421_1004, 0506_2039, 0522_0954, 0607_0120, 0622_1815, 0708_1146, 0724_0510, 0808_2122, 0824_1153, 0908_2347, 0924_0855, 1009_1445, 1024_1736, 1108_1718, 1123_1435, 1208_0941, 1223_0336]),
    (1903, [0106_2044, 0121_1414, 0205_0831, 0220_0441, 0307_0259, 0322_0415, 0406_0826, 0421_1559, 0507_0226, 0522_1545, 0607_0707, 0623_0005, 0708_1737, 0724_1059, 0809_0316, 0824_1742, 0909_0542, 0924_1444, 1009_2042, 1024_2323, 1108_2313, 1123_2021, 1208_1535, 1223_0920]),
    (1904, [0107_0237, 0121_1958, 0205_1424, 0220_1025, 0306_0852, 0321_0959, 0405_1419, 0420_2142, 0506_0819, 0521_2129, 0606_1301, 0622_0552, 0707_2332, 0723_1650, 0808_0912, 0823_2336, 0908_1138, 0923_2040, 1009_0236, 1024_0519, 1108_0505, 1123_0216, 1207_2125, 1222_1514]),
    (1905, [0106_0827, 0121_0152, 0204_2016, 0219_1621, 0306_1446, 0321_1558, 0405_2015, 0421_0344, 0506_1414, 0522_0331, 0606_1854, 0622_1152, 0708_0520, 0723_2246, 0808_1457, 0824_0529, 0908_1722, 0924_0230, 1009_0820, 1024_1108, 1108_1050, 1123_0805, 1208_0311, 1222_2104]),
    (1906, [0106_1414, 0121_0743, 0205_0204, 0219_2215, 0306_2036, 0321_2153, 0406_0207, 0421_0939, 0506_2009, 0522_0925, 0607_0049, 0622_1742, 0708_1115, 0724_0433, 0808_2052, 0824_1114, 0908_2316, 0924_0815, 1009_1415, 1024_1655, 1108_1647, 1123_1354, 1208_0909, 1223_0253]),
    (1907, [0106_2012, 0121_1331, 0205_0759, 0220_0359, 0307_0227, 0322_0333, 0406_0755, 0421_1517, 0507_0154, 0522_1503, 0607_0633, 0622_2323, 0708_1659, 0724_1018, 0809_0236, 0824_1704, 0909_0502, 0924_1409, 1009_2003, 1024_2252, 1108_2236, 1123_1952, 1208_1459, 1223_0852]),
    (1908, [0107_0201, 0121_1928, 0205_1347, 0220_0954, 0306_0814, 0321_0928, 0405_1340, 0420_2112, 0506_0739, 0521_2058, 0606_1219, 0622_0519, 0707_2248, 0723_1614, 0808_0827, 0823_2257, 0908_1052, 0923_1958, 1009_0151, 1024_0437, 1108_0422, 1123_0135, 1207_2044, 1222_1433]),
    (1909, [0106_0745, 0121_0111, 0204_1933, 0219_1539, 0306_1401, 0321_1513, 0405_1930, 0421_0258, 0506_1331, 0522_0245, 0606_1814, 0622_1106, 0708_0444, 0723_2201, 0808_1423, 0824_0444, 0908_1647, 0924_0145, 1009_0743, 1024_1023, 1108_1013, 1123_0720, 1208_0235, 1222_2020]),
    (1910, [0106_1338, 0121_0659, 0205_0128, 0219_2128, 0306_1957, 0321_2103, 0406_0123, 0421_0846, 0506_1920, 0522_0830, 0606_2357, 0622_1649, 0708_1021, 0724_0343, 0808_1957, 0824_1027, 0908_2222, 0924_0731, 1009_1321, 1024_1611, 1108_1554, 1123_1311, 1208_0817, 1223_0212]),
    (1911, [0106_1921, 0121_1252, 0205_0710, 0220_0321, 0307_0139, 0322_0255, 0406_0705, 0421_1436, 0507_0101, 0522_1419, 0607_0538, 0622_2236, 0708_1605, 0724_0929, 0809_0144, 0824_1613, 0909_0413, 0924_1318, 1009_1915, 1024_2158, 1108_2147, 1123_1856, 1208_1408, 1223_0753]),
    (1912, [0107_0108, 0121_1829, 0205_1254, 0220_0856, 0306_0721, 0321_0829, 0405_1248, 0420_2013, 0506_0647, 0521_1957, 0606_1128, 0622_0417, 0707_2157, 0723_1514, 0808_0737, 0823_2201, 0908_1006, 0923_1908, 1009_0107, 1024_0350, 1108_0339, 1123_0048, 1207_1959, 1222_1345]),
    (1913, [0106_0658, 0121_0019, 0204_1843, 0219_1444, 0306_1309, 0321_1418, 0405_1836, 0421_0203, 0506_1235, 0522_0150, 0606_1714, 0622_1010, 0708_0339, 0723_2104, 0808_1316, 0824_0348, 0908_1542, 0924_0053, 1009_0644, 1024_0935, 1108_0918, 1123_0635, 1208_0141, 1222_1935]),
    (1914, [0106_1243, 0121_0612, 0205_0029, 0219_2038, 0306_1856, 0321_2011, 0406_0022, 0421_0753, 0506_1820, 0522_0738, 0606_2300, 0622_1555, 0708_0927, 0724_0247, 0808_1905, 0824_0930, 0908_2133, 0924_0634, 1009_1235, 1024_1517, 1108_1511, 1123_1220, 1208_0737, 1223_0122]),
    (1915, [0106_1840, 0121_1200, 0205_0626, 0220_0223, 0307_0048, 0322_0151, 0406_0609, 0421_1329, 0507_0003, 0522_1311, 0607_0440, 0622_2129, 0708_1508, 0724_0826, 0809_0048, 0824_1515, 0909_0317, 0924_1224, 1009_1821, 1024_2110, 1108_2058, 1123_1813, 1208_1324, 1223_0716]),
    (1916, [0107_0028, 0121_1754, 0205_1214, 0220_0818, 0306_0638, 0321_0747, 0405_1158, 0420_1925, 0506_0550, 0521_1906, 0606_1026, 0622_0325, 0707_2054, 0723_1421, 0808_0635, 0823_2109, 0908_0905, 0923_1815, 1009_0008, 1024_0257, 1108_0242, 1122_2358, 1207_1906, 1222_1259]),
    (1917, [0106_0610, 0120_2337, 0204_1758, 0219_1405, 0306_1225, 0321_1337, 0405_1750, 0421_0118, 0506_1146, 0522_0059, 0606_1623, 0622_0914, 0708_0250, 0723_2008, 0808_1230, 0824_0254, 0908_1459, 0924_0000, 1009_0602, 1024_0844, 1108_0837, 1123_0545, 1208_0101, 1222_1846]),
    (1918, [0106_1204, 0121_0525, 0204_2353, 0219_1953, 0306_1821, 0321_1926, 0405_2345, 0421_0706, 0506_1738, 0522_0646, 0606_2211, 0622_1500, 0708_0832, 0724_0152, 0808_1807, 0824_0837, 0908_2035, 0924_0546, 1009_1140, 1024_1433, 1108_1419, 1123_1138, 1208_0646, 1223_0041]),
    (1919, [0106_1752, 0121_1121, 0205_0539, 0220_0148, 0307_0006, 0322_0119, 0406_0529, 0421_1259, 0506_2322, 0522_1239, 0607_0357, 0622_2054, 0708_1421, 0724_0744, 0808_2358, 0824_1428, 0909_0228, 0924_1135, 1009_1733, 1024_2021, 1108_2012, 1123_1725, 1208_1238, 1223_0627]),
    (1920, [0106_2341, 0121_1704, 0205_1127, 0220_0729, 0306_0551, 0321_0659, 0405_1115, 0420_1839, 0506_0512, 0521_1822, 0606_0951, 0622_0240, 0707_2019, 0723_1335, 0808_0558, 0823_2021, 0908_0827, 0923_1728, 1008_2329, 1024_0213, 1108_0205, 1122_2315, 1207_1830, 1222_1217]),
    (1921, [0106_0534, 0120_2255, 0204_1720, 0219_1320, 0306_1145, 0321_1251, 0405_1709, 0421_0032, 0506_1104, 0522_0017, 0606_1542, 0622_0836, 0708_0207, 0723_1930, 0808_1144, 0824_0215, 0908_1410, 0923_2320, 1009_0511, 1024_0802, 1108_0746, 1123_0504, 1208_0011, 1222_1807]),
    (1922, [0106_1117, 0121_0448, 0204_2307, 0219_1916, 0306_1734, 0321_1849, 0405_2258, 0421_0629, 0506_1653, 0522_0610, 0606_2130, 0622_1427, 0708_0758, 0724_0120, 0808_1737, 0824_0804, 0908_2006, 0924_0510, 1009_1109, 1024_1353, 1108_1345, 1123_1055, 1208_0611, 1222_2357]),
    (1923, [0106_1714, 0121_1035, 0205_0501, 0220_0100, 0306_2325, 0322_0029, 0406_0446, 0421_1206, 0506_2238, 0522_1145, 0607_0314, 0622_2003, 0708_1342, 0724_0701, 0808_2325, 0824_1352, 0909_0157, 0924_1104, 1009_1703, 1024_1951, 1108_1940, 1123_1654, 1208_1205, 1223_0553]),
    (1924, [0106_2306, 0121_1629, 0205_1050, 0220_0652, 0306_0513, 0321_0620, 0405_1033, 0420_1759, 0506_0426, 0521_1741, 0606_0902, 0622_0159, 0707_1929, 0723_1258, 0808_0512, 0823_1948, 0908_0746, 0923_1658, 1008_2252, 1024_0144, 1108_0129, 1122_2246, 1207_1753, 1222_1145]),
    (1925, [0106_0453, 0120_2220, 0204_1637, 0219_1243, 0306_1100, 0321_1212, 0405_1623, 0420_2351, 0506_1018, 0521_2333, 0606_1457, 0622_0750, 0708_0125, 0723_1845, 0808_1107, 0824_0133, 0908_1340, 0923_2243, 1009_0448, 1024_0731, 1108_0726, 1123_0435, 1207_2352, 1222_1737]),
    (1926, [0106_1054, 0121_0413, 0204_2238, 0219_1835, 0306_1700, 0321_1801, 0405_2218, 0421_0536, 0506_1609, 0522_0515, 0606_2042, 0622_1330, 0708_0706, 0724_0025, 0808_1644, 0824_0714, 0908_1916, 0924_0427, 1009_1025, 1024_1318, 1108_1308, 1123_1028, 1208_0539, 1222_2333]),
    (1927, [0106_1645, 0121_1012, 0205_0430, 0220_0034, 0306_2250, 0321_2359, 0406_0406, 0421_1132, 0506_2153, 0522_1108, 0607_0225, 0622_1922, 0708_1250, 0724_0617, 0808_2231, 0824_1305, 0909_0105, 0924_1017, 1009_1615, 1024_1907, 1108_1857, 1123_1614, 1208_1126, 1223_0519]),
    (1928, [0106_2231, 0121_1557, 0205_1017, 0220_0619, 0306_0437, 0321_0544, 0405_0955, 0420_1717, 0506_0344, 0521_1653, 0606_0817, 0622_0107, 0707_1844, 0723_1202, 0808_0428, 0823_1853, 0908_0702, 0923_1606, 1008_2210, 1024_0055, 1108_0050, 1122_2200, 1207_1717, 1222_1104]),
    (1929, [0106_0422, 0120_2142, 0204_1609, 0219_1207, 0306_1032, 0321_1135, 0405_1551, 0420_2311, 0506_0941, 0521_2248, 0606_1411, 0622_0701, 0708_0032, 0723_1753, 0808_1009, 0824_0041, 0908_1240, 0923_2152, 1009_0347, 1024_0642, 1108_0628, 1123_0348, 1207_2256, 1222_1653]),
    (1930, [0106_1003, 0121_0333, 0204_2151, 0219_1800, 0306_1617, 0321_1730, 0405_2138, 0421_0506, 0506_1527, 0522_0442, 0606_1958, 0622_1253, 0708_0620, 0723_2342, 0808_1557, 0824_0626, 0908_1828, 0924_0336, 1009_0938, 1024_1226, 1108_1220, 1123_0935, 1208_0451, 1222_2240]),
    (1931, [0106_1556, 0121_0918, 0205_0341, 0219_2340, 0306_2202, 0321_2306, 0406_0321, 0421_1040, 0506_2110, 0522_1015, 0607_0142, 0622_1828, 0708_1206, 0724_0521, 0808_2145, 0824_1210, 0909_0017, 0924_0923, 1009_1527, 1024_1816, 1108_1810, 1123_1525, 1208_1040, 1223_0430]),
    (1932, [0106_2145, 0121_1507, 0205_0930, 0220_0528, 0306_0350, 0321_0454, 0405_0906, 0420_1628, 0506_0255, 0521_1607, 0606_0728, 0622_0023, 0707_1752, 0723_1118, 0808_0332, 0823_1806, 0908_0603, 0923_1516, 1008_2110, 1024_0004, 1107_2350, 1122_2110, 1207_1618, 1222_1014]),
    (1933, [0106_0323, 0120_2053, 0204_1509, 0219_1116, 0306_0932, 0321_1043, 0405_1451, 0420_2218, 0506_0842, 0521_2157, 0606_1318, 0622_0612, 0707_2345, 0723_1706, 0808_0926, 0823_2352, 0908_1158, 0923_2101, 1009_0304, 1024_0548, 1108_0543, 1123_0253, 1207_2211, 1222_1558]),
    (1934, [0106_0917, 0121_0237, 0204_2104, 0219_1702, 0306_1526, 0321_1628, 0405_2044, 0421_0400, 0506_1431, 0522_0335, 0606_1902, 0622_1148, 0708_0525, 0723_2242, 0808_1504, 0824_0532, 0908_1736, 0924_0245, 1009_0845, 1024_1136, 1108_1127, 1123_0844, 1208_0357, 1222_2150]),
    (1935, [0106_1502, 0121_0828, 0205_0249, 0219_2252, 0306_2110, 0321_2218, 0406_0226, 0421_0950, 0506_2012, 0522_0925, 0607_0042, 0622_1738, 0708_1106, 0724_0433, 0808_2048, 0824_1124, 0908_2324, 0924_0838, 1009_1436, 1024_1729, 1108_1718, 1123_1435, 1208_0945, 1223_0337]),
    (1936, [0106_2047, 0121_1412, 0205_0829, 0220_0433, 0306_0249, 0321_0358, 0405_0807, 0420_1531, 0506_0157, 0521_1508, 0606_0631, 0621_2322, 0707_1658, 0723_1018, 0808_0243, 0823_1710, 0908_0521, 0923_1426, 1008_2033, 1023_2318, 1107_2315, 1122_2025, 1207_1542, 1222_0927]),
    (1937, [0106_0244, 0120_2001, 0204_1426, 0219_1021, 0306_0845, 0321_0945, 0405_1402, 0420_2119, 0506_0751, 0521_2057, 0606_1223, 0622_0512, 0707_2246, 0723_1607, 0808_0825, 0823_2258, 0908_1059, 0923_2013, 1009_0211, 1024_0507, 1108_0455, 1123_0216, 1207_2126, 1222_1522]),
    (1938, [0106_0831, 0121_0159, 0204_2015, 0219_1620, 0306_1434, 0321_1543, 0405_1949, 0421_0315, 0506_1335, 0522_0250, 0606_1807, 0622_1104, 0708_0431, 0723_2157, 0808_1413, 0824_0446, 0908_1648, 0924_0200, 1009_0801, 1024_1054, 1108_1048, 1123_0806, 1208_0322, 1222_2113]),
    (1939, [0106_1428, 0121_0751, 0205_0211, 0219_2209, 0306_2026, 0321_2129, 0406_0138, 0421_0855, 0506_1921, 0522_0827, 0606_2352, 0622_1639, 0708_1018, 0724_0337, 0808_2003, 0824_1031, 0908_2242, 0924_0749, 1009_1357, 1024_1646, 1108_1644, 1123_1358, 1208_0917, 1223_0306]),
    (1940, [0106_2024, 0121_1344, 0205_0808, 0220_0404, 0306_0224, 0321_0324, 0405_0735, 0420_1451, 0506_0116, 0521_1423, 0606_0544, 0621_2236, 0707_1608, 0723_0934, 0808_0152, 0823_1629, 0908_0429, 0923_1345, 1008_1942, 1023_2239, 1107_2227, 1122_1949, 1207_1458, 1222_0855]),
    (1941, [0106_0204, 0120_1934, 0204_1350, 0219_0957, 0306_0810, 0321_0921, 0405_1325, 0420_2051, 0506_0710, 0521_2023, 0606_1139, 0622_0433, 0707_2203, 0723_1526, 0808_0746, 0823_2217, 0908_1024, 0923_1933, 1009_0138, 1024_0427, 1108_0424, 1123_0138, 1207_2056, 1222_1444]),
    (1942, [0106_0802, 0121_0124, 0204_1949, 0219_1547, 0306_1409, 0321_1511, 0405_1924, 0421_0239, 0506_1307, 0522_0209, 0606_1733, 0622_1016, 0708_0352, 0723_2107, 0808_1330, 0824_0358, 0908_1606, 0924_0116, 1009_0722, 1024_1015, 1108_1011, 1123_0731, 1208_0247, 1222_2040]),
    (1943, [0106_1355, 0121_0719, 0205_0140, 0219_2140, 0306_1959, 0321_2103, 0406_0111, 0421_0832, 0506_1854, 0522_0803, 0606_2319, 0622_1612, 0708_0939, 0724_0305, 0808_1918, 0824_0955, 0908_2155, 0924_0712, 1009_1310, 1024_1608, 1108_1559, 1123_1321, 1208_0833, 1223_0229]),
    (1944, [0106_1939, 0121_1307, 0205_0723, 0220_0327, 0306_0141, 0321_0249, 0405_0654, 0420_1418, 0506_0040, 0521_1351, 0606_0511, 0621_2202, 0707_1536, 0723_0856, 0808_0119, 0823_1546, 0908_0356, 0923_1302, 1008_1909, 1023_2156, 1107_2155, 1122_1907, 1207_1428, 1222_0815]),
    (1945, [0106_0135, 0120_1854, 0204_1320, 0219_0915, 0306_0738, 0321_0837, 0405_1252, 0420_2007, 0506_0637, 0521_1940, 0606_1106, 0622_0352, 0707_2127, 0723_1445, 0808_0705, 0823_2135, 0908_0938, 0923_1850, 1009_0049, 1024_0344, 1108_0334, 1123_0055, 1207_2008, 1222_1404]),
    (1946, [0106_0716, 0121_0045, 0204_1904, 0219_1509, 0306_1325, 0321_1433, 0405_1839, 0421_0202, 0506_1222, 0522_0134, 0606_1649, 0622_0944, 0708_0311, 0723_2037, 0808_1252, 0824_0326, 0908_1527, 0924_0041, 1009_0641, 1024_0935, 1108_0927, 1123_0646, 1208_0200, 1222_1953]),
    (1947, [0106_1306, 0121_0632, 0205_0050, 0219_2052, 0306_1908, 0321_2013, 0406_0020, 0421_0740, 0506_1803, 0522_0709, 0606_2231, 0622_1519, 0708_0856, 0724_0214, 0808_1841, 0824_0909, 0908_2121, 0924_0629, 1009_1237, 1024_1526, 1108_1524, 1123_1238, 1208_0756, 1223_0143]),
    (1948, [0106_1900, 0121_1218, 0205_0642, 0220_0237, 0306_0058, 0321_0157, 0405_0610, 0420_1325, 0505_2352, 0521_1258, 0606_0420, 0621_2111, 0707_1444, 0723_0808, 0808_0026, 0823_1503, 0908_0305, 0923_1222, 1008_1820, 1023_2118, 1107_2107, 1122_1829, 1207_1338, 1222_0733]),
    (1949, [0106_0041, 0120_1809, 0204_1223, 0219_0827, 0306_0639, 0321_0748, 0405_1152, 0420_1917, 0506_0537, 0521_1851, 0606_1007, 0622_0303, 0707_2032, 0723_1357, 0808_0615, 0823_2048, 0908_0854, 0923_1806, 1009_0011, 1024_0303, 1108_0300, 1123_0016, 1207_1933, 1222_1323]),
    (1950, [0106_0639, 0121_0000, 0204_1821, 0219_1418, 0306_1235, 0321_1335, 0405_1745, 0421_0059, 0506_1125, 0522_0027, 0606_1551, 0622_0836, 0708_0213, 0723_1930, 0808_1155, 0824_0223, 0908_1434, 0923_2344, 1009_0552, 1024_0845, 1108_0844, 1123_0603, 1208_0122, 1222_1913]),
    (1951, [0106_1230, 0121_0552, 0205_0014, 0219_2010, 0306_1827, 0321_1926, 0405_2333, 0421_0648, 0506_1709, 0522_0615, 0606_2133, 0622_1425, 0708_0754, 0724_0121, 0808_1737, 0824_0816, 0908_2018, 0924_0537, 1009_1136, 1024_1436, 1108_1427, 1123_1151, 1208_0702, 1223_0100]),
    (1952, [0106_1810, 0121_1139, 0205_0553, 0220_0157, 0306_0007, 0321_0114, 0405_0515, 0420_1237, 0505_2254, 0521_1204, 0606_0320, 0621_2013, 0707_1345, 0723_0707, 0807_2331, 0823_1403, 0908_0214, 0923_1124, 1008_1732, 1023_2022, 1107_2022, 1122_1736, 1207_1256, 1222_0643]),
    (1953, [0106_0002, 0120_1721, 0204_1146, 0219_0741, 0306_0603, 0321_0701, 0405_1113, 0420_1826, 0506_0452, 0521_1753, 0606_0916, 0622_0200, 0707_1935, 0723_1252, 0808_0515, 0823_1945, 0908_0753, 0923_1706, 1008_2310, 1024_0206, 1108_0201, 1122_2322, 1207_1837, 1222_1232]),
    (1954, [0106_0545, 0120_2311, 0204_1731, 0219_1332, 0306_1149, 0321_1254, 0405_1659, 0421_0020, 0506_1038, 0521_2347, 0606_1501, 0622_0754, 0708_0119, 0723_1845, 0808_1059, 0824_0136, 0908_1338, 0923_2255, 1009_0457, 1024_0756, 1108_0751, 1123_0514, 1208_0028, 1222_1824]),
    (1955, [0106_1136, 0121_0502, 0204_2318, 0219_1919, 0306_1731, 0321_1835, 0405_2239, 0421_0558, 0506_1618, 0522_0524, 0606_2043, 0622_1331, 0708_0706, 0724_0025, 0808_1650, 0824_0719, 0908_1932, 0924_0441, 1009_1052, 1024_1343, 1108_1345, 1123_1101, 1208_0623, 1223_0011]),
    (1956, [0106_1730, 0121_1048, 0205_0512, 0220_0105, 0305_2325, 0321_0021, 0405_0431, 0420_1144, 0505_2210, 0521_1113, 0606_0236, 0621_1924, 0707_1258, 0723_0620, 0807_2240, 0823_1315, 0908_0119, 0923_1035, 1008_1636, 1023_1934, 1107_1926, 1122_1650, 1207_1202, 1222_0600]),
    (1957, [0105_2311, 0120_1639, 0204_1055, 0219_0658, 0306_0510, 0321_0617, 0405_1019, 0420_1741, 0506_0358, 0521_1710, 0606_0825, 0622_0121, 0707_1848, 0723_1215, 0808_0432, 0823_1908, 0908_0712, 0923_1626, 1008_2230, 1024_0124, 1108_0120, 1122_2239, 1207_1756, 1222_1149]),
    (1958, [0106_0504, 0120_2229, 0204_1649, 0219_1249, 0306_1105, 0321_1206, 0405_1612, 0420_2327, 0506_0949, 0521_2251, 0606_1412, 0622_0657, 0708_0033, 0723_1751, 0808_1017, 0824_0046, 0908_1259, 0923_2209, 1009_0419, 1024_0711, 1108_0712, 1123_0429, 1207_2350, 1222_1740]),
    (1959, [0106_1058, 0121_0419, 0204_2242, 0219_1838, 0306_1657, 0321_1755, 0405_2203, 0421_0517, 0506_1539, 0522_0442, 0606_2000, 0622_1250, 0708_0620, 0723_2345, 0808_1604, 0824_0643, 0908_1848, 0924_0408, 1009_1010, 1024_1311, 1108_1302, 1123_1027, 1208_0537, 1222_2334]),
    (1960, [0106_1643, 0121_1010, 0205_0423, 0220_0026, 0305_2236, 0320_2343, 0405_0344, 0420_1106, 0505_2123, 0521_1034, 0606_0149, 0621_1842, 0707_1213, 0723_0537, 0807_2200, 0823_1234, 0908_0045, 0923_0959, 1008_1609, 1023_1902, 1107_1902, 1122_1618, 1207_1138, 1222_0526]),
    (1961, [0105_2243, 0120_1601, 0204_1022, 0219_0617, 0306_0435, 0321_0532, 0405_0942, 0420_1655, 0506_0321, 0521_1622, 0606_0746, 0622_0030, 0707_1807, 0723_1124, 0808_0348, 0823_1819, 0908_0629, 0923_1542, 1008_2151, 1024_0047, 1108_0046, 1122_2208, 1207_1726, 1222_1120]),
    (1962, [0106_0435, 0120_2158, 0204_1617, 0219_1215, 0306_1030, 0321_1130, 0405_1534, 0420_2251, 0506_0910, 0521_2217, 0606_1331, 0622_0624, 0707_2351, 0723_1718, 0808_0934, 0824_0012, 0908_1215, 0923_2135, 1009_0338, 1024_0640, 1108_0635, 1123_0402, 1207_2317, 1222_1715]),
    (1963, [0106_1027, 0121_0354, 0204_2208, 0219_1809, 0306_1617, 0321_1720, 0405_2119, 0421_0436, 0506_1452, 0522_0358, 0606_1914, 0622_1204, 0708_0538, 0723_2259, 0808_1525, 0824_0557, 0908_1812, 0924_0323, 1009_0936, 1024_1229, 1108_1232, 1123_0949, 1208_0513, 1222_2302]),
    (1964, [0106_1622, 0121_0941, 0205_0405, 0219_2357, 0305_2216, 0320_2310, 0405_0318, 0420_1027, 0505_2051, 0521_0950, 0606_0112, 0621_1757, 0707_1132, 0723_0453, 0807_2116, 0823_1151, 0907_2359, 0923_0917, 1008_1521, 1023_1821, 1107_1815, 1122_1539, 1207_1053, 1222_0450]),
    (1965, [0105_2202, 0120_1529, 0204_0946, 0219_0548, 0306_0401, 0321_0505, 0405_0907, 0420_1626, 0506_0242, 0521_1550, 0606_0702, 0621_2356, 0707_1721, 0723_1048, 0808_0305, 0823_1743, 0908_0548, 0923_1506, 1008_2111, 1024_0010, 1108_0006, 1122_2129, 1207_1645, 1222_1040]),
    (1966, [0106_0354, 0120_2120, 0204_1538, 0219_1138, 0306_0951, 0321_1053, 0405_1457, 0420_2212, 0506_0831, 0521_2132, 0606_1250, 0622_0533, 0707_2307, 0723_1623, 0808_0849, 0823_2318, 0908_1132, 0923_2043, 1009_0257, 1024_0551, 1108_0555, 1123_0314, 1207_2238, 1222_1628]),
    (1967, [0106_0948, 0121_0308, 0204_2131, 0219_1724, 0306_1542, 0321_1637, 0405_2045, 0421_0355, 0506_1418, 0522_0318, 0606_1836, 0622_1123, 0708_0453, 0723_2216, 0808_1435, 0824_0512, 0908_1718, 0924_0238, 1009_0841, 1024_1144, 1108_1137, 1123_0904, 1208_0418, 1222_2216]),
    (1968, [0106_1526, 0121_0854, 0205_0308, 0219_2309, 0305_2118, 0320_2222, 0405_0221, 0420_0941, 0505_1956, 0521_0906, 0606_0019, 0621_1713, 0707_1042, 0723_0407, 0807_2027, 0823_1103, 0907_2311, 0923_0826, 1008_1434, 1023_1730, 1107_1729, 1122_1449, 1207_1008, 1222_0400]),
    (1969, [0105_2117, 0120_1438, 0204_0859, 0219_0455, 0306_0311, 0321_0408, 0405_0815, 0420_1527, 0506_0150, 0521_1450, 0606_0612, 0621_2255, 0707_1632, 0723_0948, 0808_0214, 0823_1643, 0908_0455, 0923_1407, 1008_2017, 1023_2311, 1107_2311, 1122_2031, 1207_1551, 1222_0944]),
    (1970, [0106_0302, 0120_2024, 0204_1446, 0219_1042, 0306_0859, 0321_0956, 0405_1402, 0420_2115, 0506_0734, 0521_2037, 0606_1152, 0622_0443, 0707_2210, 0723_1537, 0808_0754, 0823_2234, 0908_1038, 0923_1959, 1009_0202, 1024_0504, 1108_0458, 1123_0225, 1207_2137, 1222_1536]),
    (1971, [0106_0845, 0121_0213, 0204_2026, 0219_1627, 0306_1435, 0321_1538, 0405_1936, 0421_0254, 0506_1308, 0522_0215, 0606_1729, 0622_1020, 0708_0351, 0723_2115, 0808_1340, 0824_0415, 0908_1630, 0924_0145, 1009_0759, 1024_1053, 1108_1057, 1123_0814, 1208_0336, 1222_2124]),
    (1972, [0106_1442, 0121_0759, 0205_0220, 0219_2211, 0305_2028, 0320_2122, 0405_0129, 0420_0838, 0505_1901, 0521_0800, 0605_2322, 0621_1606, 0707_0943, 0723_0303, 0807_1929, 0823_1003, 0907_2215, 0923_0733, 1008_1342, 1023_1641, 1107_1639, 1122_1403, 1207_0919, 1222_0313]),
    (1973, [0105_2025, 0120_1348, 0204_0804, 0219_0401, 0306_0213, 0321_0313, 0405_0714, 0420_1431, 0506_0047, 0521_1354, 0606_0507, 0621_2201, 0707_1527, 0723_0856, 0808_0113, 0823_1553, 0908_0359, 0923_1321, 1008_1927, 1023_2230, 1107_2227, 1122_1954, 1207_1510, 1222_0908]),
    (1974, [0106_0220, 0120_1946, 0204_1400, 0219_0959, 0306_0807, 0321_0907, 0405_1305, 0420_2019, 0506_0634, 0521_1936, 0606_1052, 0622_0338, 0707_2111, 0723_1430, 0808_0657, 0823_2129, 0908_0945, 0923_1858, 1009_0115, 1024_0411, 1108_0418, 1123_0138, 1207_2105, 1222_1456]),
    (1975, [0106_0818, 0121_0136, 0204_1959, 0219_1550, 0306_1406, 0321_1457, 0405_1902, 0421_0207, 0506_1227, 0522_0124, 0606_1642, 0622_0927, 0708_0259, 0723_2022, 0808_1245, 0824_0324, 0908_1533, 0924_0055, 1009_0702, 1024_1006, 1108_1003, 1123_0731, 1208_0246, 1222_2046]),
    (1976, [0106_1357, 0121_0725, 0205_0140, 0219_2140, 0305_1948, 0320_2050, 0405_0047, 0420_0803, 0505_1815, 0521_0721, 0605_2231, 0621_1524, 0707_0851, 0723_0218, 0807_1838, 0823_0918, 0907_2128, 0923_0648, 1008_1258, 1023_1558, 1107_1559, 1122_1322, 1207_0841, 1222_0235]),
    (1977, [0105_1951, 0120_1315, 0204_0733, 0219_0331, 0306_0144, 0321_0242, 0405_0646, 0420_1357, 0506_0016, 0521_1315, 0606_0432, 0621_2114, 0707_1448, 0723_0804, 0808_0030, 0823_1500, 0908_0316, 0923_1229, 1008_1844, 1023_2141, 1107_2146, 1122_1907, 1207_1431, 1222_0823]),
    (1978, [0106_0143, 0120_1904, 0204_1327, 0219_0921, 0306_0738, 0321_0834, 0405_1239, 0420_1950, 0506_0609, 0521_1909, 0606_1023, 0622_0310, 0707_2037, 0723_1400, 0808_0618, 0823_2057, 0908_0902, 0923_1825, 1009_0031, 1024_0337, 1108_0334, 1123_0105, 1207_2020, 1222_1421]),
    (1979, [0106_0732, 0121_0100, 0204_1912, 0219_1513, 0306_1320, 0321_1422, 0405_1818, 0421_0135, 0506_1147, 0522_0054, 0606_1605, 0622_0856, 0708_0225, 0723_1949, 0808_1211, 0824_0247, 0908_1500, 0924_0016, 1009_0630, 1024_0928, 1108_0933, 1123_0654, 1208_0218, 1222_2010]),
    (1980, [0106_1329, 0121_0649, 0205_0110, 0219_2102, 0305_1917, 0320_2010, 0405_0015, 0420_0723, 0505_1745, 0521_0642, 0605_2204, 0621_1447, 0707_0824, 0723_0142, 0807_1809, 0823_0841, 0907_2053, 0923_0609, 1008_1219, 1023_1517, 1107_1518, 1122_1241, 1207_0801, 1222_0156]),
    (1981, [0105_1913, 0120_1236, 0204_0655, 0219_0252, 0306_0105, 0321_0203, 0405_0605, 0420_1319, 0505_2335, 0521_1240, 0606_0353, 0621_2045, 0707_1412, 0723_0740, 0807_2357, 0823_1438, 0908_0243, 0923_1205, 1008_1809, 1023_2113, 1107_2108, 1122_1836, 1207_1351, 1222_0751]),
    (1982, [0106_0103, 0120_1831, 0204_1245, 0219_0846, 0306_0655, 0321_0756, 0405_1153, 0420_1908, 0506_0520, 0521_1823, 0606_0936, 0622_0223, 0707_1955, 0723_1315, 0808_0542, 0823_2015, 0908_0832, 0923_1746, 1009_0002, 1024_0258, 1108_0304, 1123_0023, 1207_1948, 1222_1338]),
    (1983, [0106_0659, 0121_0017, 0204_1840, 0219_1431, 0306_1247, 0321_1339, 0405_1744, 0421_0050, 0506_1111, 0522_0007, 0606_1526, 0622_0809, 0708_0143, 0723_1904, 0808_1130, 0824_0207, 0908_1420, 0923_2341, 1009_0551, 1024_0854, 1108_0852, 1123_0618, 1208_0134, 1222_1930]),
    (1984, [0106_1241, 0121_0605, 0205_0019, 0219_2016, 0305_1825, 0320_1924, 0404_2322, 0420_0638, 0505_1651, 0521_0558, 0605_2109, 0621_1402, 0707_0729, 0723_0058, 0807_1718, 0823_0800, 0907_2010, 0923_0533, 1008_1142, 1023_1446, 1107_1445, 1122_1211, 1207_0728, 1222_0123]),
    (1985, [0105_1835, 0120_1158, 0204_0612, 0219_0207, 0306_0016, 0321_0114, 0405_0514, 0420_1226, 0505_2243, 0521_1143, 0606_0300, 0621_1944, 0707_1319, 0723_0636, 0807_2304, 0823_1336, 0908_0153, 0923_1107, 1008_1724, 1023_2022, 1107_2029, 1122_1751, 1207_1316, 1222_0708]),
    (1986, [0106_0028, 0120_1746, 0204_1208, 0219_0758, 0306_0612, 0321_0703, 0405_1106, 0420_1812, 0506_0431, 0521_1728, 0606_0844, 0622_0130, 0707_1901, 0723_1224, 0808_0446, 0823_1926, 0908_0735, 0923_1659, 1008_2307, 1024_0214, 1108_0213, 1122_2344, 1207_1901, 1222_1302]),
    (1987, [0106_0613, 0120_2340, 0204_1752, 0219_1350, 0306_1154, 0321_1252, 0405_1644, 0420_2358, 0506_1006, 0521_2310, 0606_1419, 0622_0711, 0708_0039, 0723_1806, 0808_1029, 0824_0110, 0908_1324, 0923_2245, 1009_0500, 1024_0801, 1108_0806, 1123_0529, 1208_0052, 1222_1846]),
    (1988, [0106_1204, 0121_0524, 0204_2343, 0219_1935, 0305_1747, 0320_1839, 0404_2239, 0420_0545, 0505_1602, 0521_0457, 0605_2015, 0621_1257, 0707_0633, 0722_2351, 0807_1620, 0823_0654, 0907_1911, 0923_0429, 1008_1044, 1023_1344, 1107_1349, 1122_1112, 1207_0634, 1222_0028]),
    (1989, [0105_1746, 0120_1107, 0204_0527, 0219_0121, 0305_2334, 0321_0028, 0405_0430, 0420_1139, 0505_2154, 0521_1054, 0606_0205, 0621_1853, 0707_1219, 0723_0545, 0807_2204, 0823_1246, 0908_0054, 0923_1020, 1008_1627, 1023_1935, 1107_1934, 1122_1705, 1207_1221, 1222_0622]),
    (1990, [0105_2333, 0120_1702, 0204_1114, 0219_0714, 0306_0519, 0321_0619, 0405_1013, 0420_1727, 0506_0336, 0521_1637, 0606_0746, 0622_0033, 0707_1800, 0723_1122, 0808_0345, 0823_1821, 0908_0637, 0923_1555, 1008_2214, 1024_0114, 1108_0124, 1122_2247, 1207_1814, 1222_1207]),
    (1991, [0106_0528, 0120_2247, 0204_1708, 0219_1258, 0306_1112, 0321_1202, 0405_1605, 0420_2309, 0506_0927, 0521_2220, 0606_1338, 0622_0619, 0707_2353, 0723_1711, 0808_0937, 0824_0013, 0908_1227, 0923_2148, 1009_0401, 1024_0705, 1108_0708, 1123_0436, 1207_2356, 1222_1754]),
    (1992, [0106_1109, 0121_0433, 0204_2248, 0219_1844, 0305_1652, 0320_1748, 0404_2145, 0420_0457, 0505_1509, 0521_0412, 0605_1922, 0621_1214, 0707_0540, 0722_2309, 0807_1527, 0823_0610, 0907_1818, 0923_0343, 1008_0951, 1023_1257, 1107_1257, 1122_1026, 1207_0544, 1221_2343]),
    (1993, [0105_1656, 0120_1023, 0204_0437, 0219_0035, 0305_2243, 0320_2341, 0405_0337, 0420_1049, 0505_2102, 0521_1002, 0606_0115, 0621_1800, 0707_1132, 0723_0451, 0807_2118, 0823_1150, 0908_0008, 0923_0922, 1008_1540, 1023_1837, 1107_1845, 1122_1607, 1207_1134, 1222_0526]),
    (1994, [0105_2248, 0120_1607, 0204_1031, 0219_0622, 0306_0438, 0321_0528, 0405_0932, 0420_1636, 0506_0254, 0521_1548, 0606_0705, 0621_2348, 0707_1719, 0723_1041, 0808_0304, 0823_1744, 0908_0555, 0923_1519, 1008_2129, 1024_0036, 1108_0035, 1122_2206, 1207_1723, 1222_1123]),
    (1995, [0106_0434, 0120_2201, 0204_1613, 0219_1211, 0306_1016, 0321_1115, 0405_1508, 0420_2222, 0506_0830, 0521_2134, 0606_1242, 0622_0534, 0707_2301, 0723_1630, 0808_0852, 0823_2335, 0908_1149, 0923_2113, 1009_0327, 1024_0631, 1108_0636, 1123_0401, 1207_2322, 1222_1717]),
    (1996, [0106_1031, 0121_0353, 0204_2208, 0219_1801, 0305_1610, 0320_1703, 0404_2102, 0420_0410, 0505_1426, 0521_0323, 0605_1841, 0621_1124, 0707_0500, 0722_2219, 0807_1449, 0823_0523, 0907_1742, 0923_0300, 1008_0919, 1023_1219, 1107_1227, 1122_0949, 1207_0514, 1221_2306]),
    (1997, [0105_1624, 0120_0943, 0204_0402, 0218_2352, 0305_2204, 0320_2255, 0405_0256, 0420_1003, 0505_2020, 0521_0918, 0606_0033, 0621_1720, 0707_1049, 0723_0415, 0807_2036, 0823_1119, 0907_2329, 0923_0856, 1008_1505, 1023_1815, 1107_1814, 1122_1547, 1207_1105, 1222_0507]),
    (1998, [0105_2218, 0120_1546, 0204_0957, 0219_0555, 0306_0357, 0321_0455, 0405_0845, 0420_1557, 0506_0203, 0521_1506, 0606_0614, 0621_2303, 0707_1630, 0723_0955, 0808_0220, 0823_1659, 0908_0516, 0923_1437, 1008_2056, 1023_2359, 1108_0008, 1122_2134, 1207_1702, 1222_1056]),
    (1999, [0106_0417, 0120_2137, 0204_1557, 0219_1147, 0306_0958, 0321_1046, 0405_1445, 0420_2146, 0506_0801, 0521_2053, 0606_1209, 0622_0449, 0707_2225, 0723_1544, 0808_0814, 0823_2251, 0908_1110, 0923_2031, 1009_0248, 1024_0552, 1108_0558, 1123_0325, 1207_2248, 1222_1644]),
    (2000, [0106_1001, 0121_0323, 0204_2140, 0219_1733, 0305_1543, 0320_1635, 0404_2032, 0420_0340, 0505_1350, 0521_0250, 0605_1759, 0621_1048, 0707_0414, 0722_2143, 0807_1403, 0823_0448, 0907_1659, 0923_0228, 1008_0838, 1023_1147, 1107_1148, 1122_0919, 1207_0437, 1221_2238]),
    (2001, [0105_1549, 0120_0916, 0204_0329, 0218_2327, 0305_2133, 0320_2231, 0405_0225, 0420_0936, 0505_1945, 0521_0844, 0605_2354, 0621_1638, 0707_1007, 0723_0326, 0807_1952, 0823_1027, 0907_2246, 0923_0805, 1008_1425, 1023_1726, 1107_1737, 1122_1500, 1207_1029, 1222_0421]),
    (2002, [0105_2144, 0120_1502, 0204_0924, 0219_0513, 0306_0328, 0321_0416, 0405_0818, 0420_1521, 0506_0137, 0521_1429, 0606_0545, 0621_2224, 0707_1556, 0723_0915, 0808_0139, 0823_1617, 0908_0431, 0923_1355, 1008_2009, 1023_2318, 1107_2322, 1122_2054, 1207_1614, 1222_1014]),
    (2003, [0106_0328, 0120_2053, 0204_1506, 0219_1100, 0306_0905, 0321_1000, 0405_1353, 0420_2103, 0506_0711, 0521_2013, 0606_1120, 0622_0410, 0707_2136, 0723_1504, 0808_0724, 0823_2208, 0908_1020, 0923_1947, 1009_0201, 1024_0508, 1108_0513, 1123_0243, 1207_2205, 1222_1604]),
    (2004, [0106_0919, 0121_0242, 0204_2056, 0219_1650, 0305_1456, 0320_1549, 0404_1943, 0420_0250, 0505_1303, 0521_0159, 0605_1714, 0621_0957, 0707_0331, 0722_2050, 0807_1320, 0823_0353, 0907_1613, 0923_0130, 1008_0749, 1023_1049, 1107_1059, 1122_0822, 1207_0349, 1221_2142]),
    (2005, [0105_1503, 0120_0822, 0204_0243, 0218_2232, 0305_2045, 0320_2133, 0405_0134, 0420_0837, 0505_1853, 0521_0747, 0605_2302, 0621_1546, 0707_0917, 0723_0241, 0807_1903, 0823_0945, 0907_2157, 0923_0723, 1008_1333, 1023_1642, 1107_1642, 1122_1415, 1207_0933, 1222_0335]),
    (2006, [0105_2047, 0120_1415, 0204_0827, 0219_0425, 0306_0229, 0321_0326, 0405_0716, 0420_1426, 0506_0031, 0521_1332, 0606_0437, 0621_2126, 0707_1451, 0723_0818, 0808_0041, 0823_1523, 0908_0339, 0923_1303, 1008_1921, 1023_2226, 1107_2235, 1122_2002, 1207_1527, 1222_0922]),
    (2007, [0106_0240, 0120_2001, 0204_1418, 0219_1009, 0306_0818, 0321_0907, 0405_1305, 0420_2007, 0506_0620, 0521_1912, 0606_1027, 0622_0306, 0707_2042, 0723_1400, 0808_0631, 0823_2108, 0908_0929, 0923_1851, 1009_0112, 1024_0415, 1108_0424, 1123_0150, 1207_2114, 1222_1508]),
    (2008, [0106_0825, 0121_0144, 0204_2000, 0219_1550, 0305_1359, 0320_1448, 0404_1846, 0420_0151, 0505_1204, 0521_0101, 0605_1612, 0621_0859, 0707_0227, 0722_1955, 0807_1216, 0823_0302, 0907_1514, 0923_0045, 1008_0657, 1023_1009, 1107_1011, 1122_0744, 1207_0302, 1221_2104]),
    (2009, [0105_1414, 0120_0740, 0204_0150, 0218_2146, 0305_1948, 0320_2044, 0405_0034, 0420_0744, 0505_1751, 0521_0651, 0605_2159, 0621_1446, 0707_0814, 0723_0136, 0807_1801, 0823_0839, 0907_2058, 0923_0619, 1008_1240, 1023_1543, 1107_1556, 1122_1323, 1207_0852, 1222_0247]),
    (2010, [0105_2009, 0120_1328, 0204_0748, 0219_0336, 0306_0146, 0321_0232, 0405_0631, 0420_1330, 0505_2344, 0521_1234, 0606_0349, 0621_2028, 0707_1402, 0723_0721, 0807_2349, 0823_1427, 0908_0245, 0923_1209, 1008_1827, 1023_2135, 1107_2143, 1122_1915, 1207_1438, 1222_0838]),
    (2011, [0106_0155, 0120_1919, 0204_1333, 0219_0925, 0306_0730, 0321_0821, 0405_1212, 0420_1917, 0506_0523, 0521_1821, 0606_0927, 0622_0216, 0707_1942, 0723_1312, 0808_0533, 0823_2021, 0908_0834, 0923_1805, 1009_0019, 1024_0330, 1108_0335, 1123_0108, 1207_2029, 1222_1430]),
    (2012, [0106_0744, 0121_0110, 0204_1922, 0219_1518, 0305_1321, 0320_1414, 0404_1806, 0420_0112, 0505_1120, 0521_0016, 0605_1526, 0621_0809, 0707_0141, 0722_1901, 0807_1131, 0823_0207, 0907_1429, 0922_2349, 1008_0612, 1023_0913, 1107_0926, 1122_0650, 1207_0219, 1221_2012]),
    (2013, [0105_1334, 0120_0652, 0204_0113, 0218_2102, 0305_1915, 0320_2002, 0405_0003, 0420_0703, 0505_1718, 0521_0610, 0605_2123, 0621_1404, 0707_0735, 0723_0056, 0807_1720, 0823_0802, 0907_2016, 0923_0544, 1008_1158, 1023_1510, 1107_1514, 1122_1248, 1207_0809, 1222_0211]),
    (2014, [0105_1924, 0120_1251, 0204_0703, 0219_0259, 0306_0102, 0321_0157, 0405_0547, 0420_1256, 0505_2259, 0521_1159, 0606_0303, 0621_1951, 0707_1315, 0723_0641, 0807_2303, 0823_1346, 0908_0201, 0923_1129, 1008_1748, 1023_2057, 1107_2107, 1122_1838, 1207_1404, 1222_0803]),
    (2015, [0106_0121, 0120_1843, 0204_1259, 0219_0850, 0306_0656, 0321_0745, 0405_1139, 0420_1842, 0506_0453, 0521_1745, 0606_0858, 0622_0138, 0707_1912, 0723_1230, 0808_0501, 0823_1937, 0908_0800, 0923_1720, 1008_2343, 1024_0247, 1108_0259, 1123_0025, 1207_1953, 1222_1348]),
    (2016, [0106_0708, 0121_0027, 0204_1846, 0219_1434, 0305_1244, 0320_1330, 0404_1728, 0420_0030, 0505_1042, 0520_2337, 0605_1449, 0621_0734, 0707_0103, 0722_1830, 0807_1053, 0823_0138, 0907_1351, 0922_2321, 1008_0533, 1023_0846, 1107_0848, 1122_0622, 1207_0141, 1221_1944]),
    (2017, [0105_1256, 0120_0624, 0204_0034, 0218_2031, 0305_1833, 0320_1929, 0404_2317, 0420_0627, 0505_1631, 0521_0531, 0605_2037, 0621_1324, 0707_0651, 0723_0015, 0807_1640, 0823_0720, 0907_1939, 0923_0502, 1008_1122, 1023_1427, 1107_1438, 1122_1205, 1207_0733, 1222_0128]),
    (2018, [0105_1849, 0120_1209, 0204_0629, 0219_0218, 0306_0028, 0321_0115, 0405_0513, 0420_1213, 0505_2225, 0521_1115, 0606_0229, 0621_1907, 0707_1242, 0723_0600, 0807_2231, 0823_1309, 0908_0130, 0923_1054, 1008_1715, 1023_2022, 1107_2032, 1122_1801, 1207_1326, 1222_0723]),
    (2019, [0106_0039, 0120_1759, 0204_1214, 0219_0804, 0306_0610, 0321_0658, 0405_1051, 0420_1755, 0506_0403, 0521_1659, 0606_0806, 0622_0054, 0707_1821, 0723_1150, 0808_0413, 0823_1902, 0908_0717, 0923_1650, 1008_2306, 1024_0220, 1108_0224, 1122_2359, 1207_1918, 1222_1319]),
    (2020, [0106_0630, 0120_2355, 0204_1803, 0219_1357, 0305_1157, 0320_1250, 0404_1638, 0419_2346, 0505_0952, 0520_2249, 0605_1358, 0621_0644, 0707_0014, 0722_1737, 0807_1006, 0823_0045, 0907_1308, 0922_2230, 1008_0455, 1023_0759, 1107_0814, 1122_0540, 1207_0109, 1221_1902]),
    (2021, [0105_1223, 0120_0540, 0203_2359, 0218_1944, 0305_1754, 0320_1837, 0404_2235, 0420_0533, 0505_1547, 0521_0437, 0605_1952, 0621_1232, 0707_0605, 0722_2326, 0807_1554, 0823_0635, 0907_1853, 0923_0421, 1008_1039, 1023_1351, 1107_1359, 1122_1134, 1207_0657, 1222_0059]),
    (2022, [0105_1814, 0120_1139, 0204_0551, 0219_0143, 0305_2344, 0321_0033, 0405_0420, 0420_1124, 0505_2126, 0521_1023, 0606_0126, 0621_1814, 0707_1138, 0723_0507, 0807_2129, 0823_1216, 0908_0032, 0923_1004, 1008_1622, 1023_1936, 1107_1945, 1122_1720, 1207_1246, 1222_0648]),
    (2023, [0106_0005, 0120_1729, 0204_1143, 0219_0734, 0306_0536, 0321_0624, 0405_1013, 0420_1714, 0506_0319, 0521_1609, 0606_0718, 0621_2358, 0707_1731, 0723_1050, 0808_0323, 0823_1801, 0908_0627, 0923_1550, 1008_2216, 1024_0121, 1108_0136, 1122_2303, 1207_1833, 1222_1227]),
    (2024, [0106_0549, 0120_2307, 0204_1727, 0219_1313, 0305_1123, 0320_1206, 0404_1602, 0419_2300, 0505_0910, 0520_2200, 0605_1310, 0621_0551, 0706_2320, 0722_1644, 0807_0909, 0822_2355, 0907_1211, 0922_2144, 1008_0400, 1023_0715, 1107_0720, 1122_0456, 1207_0017, 1221_1820]),
    (2025, [0105_1133, 0120_0500, 0203_2310, 0218_1907, 0305_1707, 0320_1801, 0404_2149, 0420_0456, 0505_1457, 0521_0355, 0605_1857, 0621_1142, 0707_0505, 0722_2229, 0807_1451, 0823_0534, 0907_1752, 0923_0319, 1008_0941, 1023_1251, 1107_1304, 1122_1035, 1207_0604, 1222_0003]),
    (2026, [0105_1723, 0120_1045, 0204_0502, 0219_0052, 0305_2259, 0320_2346, 0405_0340, 0420_1039, 0505_2049, 0521_0937, 0606_0048, 0621_1724, 0707_1057, 0723_0413, 0807_2043, 0823_1119, 0907_2341, 0923_0905, 1008_1529, 1023_1838, 1107_1852, 1122_1623, 1207_1152, 1222_0550]),
    (2027, [0105_2310, 0120_1630, 0204_1046, 0219_0633, 0306_0439, 0321_0525, 0405_0917, 0420_1618, 0506_0225, 0521_1518, 0606_0626, 0621_2311, 0707_1637, 0723_1005, 0808_0227, 0823_1714, 0908_0528, 0923_1502, 1008_2117, 1024_0033, 1108_0038, 1122_2216, 1207_1737, 1222_1142]),
    (2028, [0106_0455, 0120_2222, 0204_1631, 0219_1226, 0305_1025, 0320_1117, 0404_1503, 0419_2209, 0505_0812, 0520_2110, 0605_1216, 0621_0502, 0706_2230, 0722_1554, 0807_0821, 0822_2301, 0907_1122, 0922_2045, 1008_0308, 1023_0613, 1107_0627, 1122_0354, 1206_2325, 1221_1720]),
    (2029, [0105_1042, 0120_0401, 0203_2221, 0218_1808, 0305_1617, 0320_1702, 0404_2058, 0420_0356, 0505_1408, 0521_0256, 0605_1810, 0621_1048, 0707_0422, 0722_2142, 0807_1412, 0823_0452, 0907_1712, 0923_0238, 1008_0858, 1023_1208, 1107_1217, 1122_0949, 1207_0514, 1221_2314]),
    (2030, [0105_1630, 0120_0954, 0204_0408, 0219_0000, 0305_2203, 0320_2252, 0405_0241, 0420_0943, 0505_1946, 0521_0841, 0605_2344, 0621_1631, 0707_0955, 0723_0325, 0807_1947, 0823_1036, 0907_2253, 0923_0827, 1008_1445, 1023_1800, 1107_1808, 1122_1544, 1207_1107, 1222_0509]),
    (2031, [0105_2223, 0120_1548, 0204_0958, 0219_0551, 0306_0351, 0321_0441, 0405_0828, 0420_1531, 0506_0135, 0521_1428, 0606_0536, 0621_2217, 0707_1549, 0723_0910, 0808_0143, 0823_1623, 0908_0450, 0923_1415, 1008_2043, 1023_2349, 1108_0005, 1122_2132, 1207_1703, 1222_1055]),
    (2032, [0106_0416, 0120_2131, 0204_1549, 0219_1132, 0305_0940, 0320_1022, 0404_1417, 0419_2114, 0505_0726, 0520_2015, 0605_1128, 0621_0409, 0706_2141, 0722_1505, 0807_0733, 0822_2218, 0907_1038, 0922_2011, 1008_0230, 1023_0546, 1107_0554, 1122_0331, 1206_2253, 1221_1656]),
    (2033, [0105_1008, 0120_0333, 0203_2141, 0218_1734, 0305_1532, 0320_1623, 0404_2008, 0420_0313, 0505_1314, 0521_0211, 0605_1713, 0621_1001, 0707_0325, 0722_2053, 0807_1316, 0823_0402, 0907_1620, 0923_0151, 1008_0814, 1023_1127, 1107_1141, 1122_0916, 1207_0445, 1221_2246]),
    (2034, [0105_1604, 0120_0927, 0204_0341, 0218_2330, 0305_2132, 0320_2217, 0405_0206, 0420_0904, 0505_1909, 0521_0757, 0605_2306, 0621_1544, 0707_0917, 0723_0236, 0807_1909, 0823_0947, 0907_2214, 0923_0739, 1008_1407, 1023_1716, 1107_1733, 1122_1505, 1207_1037, 1222_0434]),
    (2035, [0105_2156, 0120_1514, 0204_0932, 0219_0516, 0306_0322, 0321_0403, 0405_0754, 0420_1449, 0506_0055, 0521_1343, 0606_0451, 0621_2133, 0707_1501, 0723_0828, 0808_0054, 0823_1544, 0908_0402, 0923_1339, 1008_1957, 1023_2316, 1107_2324, 1122_2103, 1207_1625, 1222_1031]),
    (2036, [0106_0343, 0120_2111, 0204_1520, 0219_1114, 0305_0912, 0320_1003, 0404_1346, 0419_2050, 0505_0649, 0520_1945, 0605_1047, 0621_0332, 0706_2057, 0722_1422, 0807_0649, 0822_2132, 0907_0955, 0922_1923, 1008_0149, 1023_0459, 1107_0514, 1122_0245, 1206_2216, 1221_1613]),
    (2037, [0105_0934, 0120_0254, 0203_2111, 0218_1659, 0305_1506, 0320_1550, 0404_1944, 0420_0240, 0505_1249, 0521_0135, 0605_1647, 0621_0922, 0707_0255, 0722_2012, 0807_1243, 0823_0322, 0907_1545, 0923_0113, 1008_0738, 1023_1050, 1107_1104, 1122_0838, 1207_0407, 1221_2207]),
    (2038, [0105_1527, 0120_0848, 0204_0303, 0218_2252, 0305_2055, 0320_2140, 0405_0129, 0420_0828, 0505_1831, 0521_0723, 0605_2225, 0621_1509, 0707_0832, 0723_0200, 0807_1821, 0823_0910, 0907_2126, 0923_0702, 1008_1321, 1023_1640, 1107_1651, 1122_1431, 1207_0956, 1222_0402]),
    (2039, [0105_2116, 0120_1443, 0204_0853, 0219_0445, 0306_0243, 0321_0332, 0405_0716, 0420_1418, 0506_0018, 0521_1311, 0606_0415, 0621_2057, 0707_1426, 0723_0748, 0808_0018, 0823_1458, 0908_0324, 0923_1249, 1008_1917, 1023_2225, 1107_2243, 1122_2012, 1207_1545, 1222_0940]),
    (2040, [0106_0303, 0120_2021, 0204_1440, 0219_1024, 0305_0831, 0320_0911, 0404_1305, 0419_1959, 0505_0609, 0520_1856, 0605_1008, 0621_0246, 0706_2019, 0722_1341, 0807_0610, 0822_2053, 0907_0914, 0922_1845, 1008_0105, 1023_0420, 1107_0429, 1122_0205, 1206_2130, 1221_1533]),
    (2041, [0105_0848, 0120_0213, 0203_2025, 0218_1617, 0305_1418, 0320_1507, 0404_1852, 0420_0155, 0505_1154, 0521_0049, 0605_1550, 0621_0836, 0707_0158, 0722_1926, 0807_1148, 0823_0236, 0907_1453, 0923_0026, 1008_0647, 1023_1002, 1107_1013, 1122_0749, 1207_0316, 1221_2118]),
    (2042, [0105_1435, 0120_0800, 0204_0213, 0218_2204, 0305_2006, 0320_2053, 0405_0040, 0420_0740, 0505_1743, 0521_0631, 0605_2138, 0621_1416, 0707_0747, 0723_0106, 0807_1739, 0823_0818, 0907_2045, 0923_0611, 1008_1240, 1023_1549, 1107_1607, 1122_1337, 1207_0909, 1222_0304]),
    (2043, [0105_2025, 0120_1341, 0204_0759, 0219_0341, 0306_0148, 0321_0228, 0405_0620, 0420_1314, 0505_2322, 0521_1209, 0606_0318, 0621_1958, 0707_1328, 0723_0653, 0807_2321, 0823_1409, 0908_0230, 0923_1207, 1008_1827, 1023_2147, 1107_2156, 1122_1935, 1207_1457, 1222_0901]),
    (2044, [0106_0212, 0120_1937, 0204_1344, 0219_0936, 0305_0731, 0320_0820, 0404_1203, 0419_1907, 0505_0505, 0520_1802, 0605_0904, 0621_0151, 0706_1916, 0722_1243, 0807_0508, 0822_1954, 0907_0816, 0922_1748, 1008_0013, 1023_0326, 1107_0342, 1122_0115, 1206_2045, 1221_1443]),
    (2045, [0105_0802, 0120_0122, 0203_1936, 0218_1522, 0305_1325, 0320_1407, 0404_1757, 0420_0053, 0505_1059, 0520_2346, 0605_1457, 0621_0734, 0707_0108, 0722_1827, 0807_1059, 0823_0139, 0907_1405, 0922_2333, 1008_0600, 1023_0912, 1107_0929, 1122_0704, 1207_0235, 1221_2035]),
    (2046, [0105_1356, 0120_0716, 0204_0131, 0218_2115, 0305_1918, 0320_1958, 0404_2345, 0420_0639, 0505_1640, 0521_0528, 0605_2032, 0621_1315, 0707_0640, 0723_0008, 0807_1633, 0823_0724, 0907_1943, 0923_0521, 1008_1142, 1023_1503, 1107_1514, 1122_1256, 1207_0821, 1222_0228]),
    (2047, [0105_1942, 0120_1310, 0204_0718, 0219_0310, 0306_0105, 0321_0153, 0405_0533, 0420_1232, 0505_2228, 0521_1120, 0606_0221, 0621_1903, 0707_1230, 0723_0555, 0807_2226, 0823_1311, 0908_0138, 0923_1108, 1008_1737, 1023_2048, 1107_2107, 1122_1838, 1207_1411, 1222_0807]),
    (2048, [0106_0129, 0120_1847, 0204_1304, 0219_0848, 0305_0654, 0320_0734, 0404_1125, 0419_1817, 0505_0424, 0520_1708, 0605_0818, 0621_0054, 0706_1827, 0722_1147, 0807_0419, 0822_1902, 0907_0728, 0922_1700, 1007_2326, 1023_0242, 1107_0257, 1122_0033, 1206_2000, 1221_1402]),
    (2049, [0105_0718, 0120_0041, 0203_1853, 0218_1442, 0305_1243, 0320_1328, 0404_1714, 0420_0013, 0505_1012, 0520_2304, 0605_1403, 0621_0647, 0707_0009, 0722_1736, 0807_0958, 0823_0047, 0907_1305, 0922_2242, 1008_0505, 1023_0825, 1107_0838, 1122_0619, 1207_0146, 1221_1952]),
    (2050, [0105_1308, 0120_0634, 0204_0044, 0218_2035, 0305_1833, 0320_1919, 0404_2303, 0420_0602, 0505_1602, 0521_0451, 0605_1954, 0621_1233, 0707_0601, 0722_2321, 0807_1552, 0823_0632, 0907_1900, 0923_0428, 1008_1100, 1023_1411, 1107_1433, 1122_1206, 1207_0741, 1222_0138]),
];
