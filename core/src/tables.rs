//! Embedded World Magnetic Model snapshot
//!
//! Three tables sampled every 10 degrees from -90 to 90 latitude (rows) and -180 to 180
//! longitude (columns). Values were evaluated once, offline, from the WMM2020 main field
//! (degree and order 8) at sea level on the WGS84 ellipsoid. The polar rows are evaluated at
//! +/-89.99 degrees where declination is otherwise undefined.
//!
//! The data is frozen: no secular variation is applied at runtime.

/// Number of latitude rows in the tables
pub const LAT_STEPS: usize = 19;
/// Number of longitude columns in the tables
pub const LON_STEPS: usize = 37;
/// Sample spacing of the tables in degrees
pub const RESOLUTION: f32 = 10.0;
/// Latitude of the first table row in degrees
pub const MIN_LATITUDE: f32 = -90.0;
/// Longitude of the first table column in degrees
pub const MIN_LONGITUDE: f32 = -180.0;

/// Magnetic declination in degrees, positive east of true north
pub const DECLINATION_TABLE: [[f32; LON_STEPS]; LAT_STEPS] = [
    // -90
    [
        148.901, 138.899, 128.897, 118.896, 108.895, 98.895, 88.895, 78.896,
        68.897, 58.899, 48.901, 38.904, 28.907, 18.910, 8.913, -1.084,
        -11.081, -21.078, -31.075, -41.073, -51.071, -61.070, -71.069, -81.069,
        -91.069, -101.070, -111.071, -121.073, -131.075, -141.078, -151.081, -161.084,
        -171.087, 178.910, 168.907, 158.904, 148.901,
    ],
    // -80
    [
        129.199, 116.997, 105.927, 95.823, 86.487, 77.729, 69.384, 61.323,
        53.449, 45.696, 38.023, 30.407, 22.831, 15.273, 7.705, 0.089,
        -7.624, -15.481, -23.524, -31.781, -40.264, -48.974, -57.912, -67.085,
        -76.519, -86.267, -96.412, -107.070, -118.387, -130.519, -143.592, -157.638,
        -172.501, 172.208, 157.054, 142.594, 129.199,
    ],
    // -70
    [
        85.170, 77.372, 71.139, 65.831, 61.024, 56.390, 51.665, 46.656,
        41.250, 35.433, 29.279, 22.934, 16.572, 10.342, 4.307, -1.600,
        -7.560, -13.811, -20.543, -27.827, -35.592, -43.672, -51.876, -60.053,
        -68.130, -76.125, -84.162, -92.489, -101.563, -112.252, -126.372, -147.934,
        177.358, 138.050, 111.576, 95.716, 85.170,
    ],
    // -60
    [
        47.650, 46.259, 44.768, 43.365, 42.067, 40.723, 39.030, 36.613,
        33.157, 28.529, 22.849, 16.484, 9.982, 3.912, -1.351, -5.813,
        -9.913, -14.358, -19.778, -26.397, -33.940, -41.832, -49.493, -56.513,
        -62.664, -67.824, -71.887, -74.648, -75.582, -73.161, -62.002, -22.998,
        26.762, 43.445, 47.912, 48.511, 47.650,
    ],
    // -50
    [
        31.109, 31.257, 30.969, 30.539, 30.190, 30.021, 29.859, 29.170,
        27.222, 23.447, 17.739, 10.588, 3.013, -3.791, -8.973, -12.400,
        -14.706, -17.071, -20.732, -26.308, -33.366, -40.766, -47.434, -52.720,
        -56.265, -57.746, -56.692, -52.393, -43.957, -30.899, -14.545, 1.504,
        14.102, 22.530, 27.518, 30.082, 31.109,
    ],
    // -40
    [
        22.396, 22.987, 23.124, 22.930, 22.582, 22.382, 22.498, 22.560,
        21.580, 18.447, 12.618, 4.573, -4.165, -11.748, -17.026, -19.937,
        -21.164, -21.712, -22.828, -25.799, -30.879, -36.773, -41.837, -45.050,
        -45.875, -43.900, -38.815, -30.832, -21.159, -11.563, -3.154, 3.965,
        10.025, 15.015, 18.724, 21.099, 22.396,
    ],
    // -30
    [
        16.760, 17.373, 17.714, 17.720, 17.337, 16.841, 16.644, 16.675,
        15.982, 13.142, 7.250, -1.222, -10.330, -17.841, -22.655, -24.944,
        -25.351, -24.257, -22.094, -20.529, -21.733, -25.504, -29.521, -31.819,
        -31.522, -28.412, -22.817, -15.826, -9.033, -3.551, 0.584, 4.039,
        7.435, 10.813, 13.692, 15.654, 16.760,
    ],
    // -20
    [
        13.079, 13.404, 13.678, 13.806, 13.530, 12.942, 12.471, 12.218,
        11.376, 8.518, 2.666, -5.621, -14.155, -20.643, -24.137, -24.917,
        -23.598, -20.455, -15.774, -11.134, -9.187, -10.903, -14.455, -17.283,
        -17.914, -16.054, -12.212, -7.509, -3.265, -0.256, 1.687, 3.377,
        5.555, 8.239, 10.728, 12.346, 13.079,
    ],
    // -10
    [
        10.873, 10.852, 10.887, 10.986, 10.847, 10.395, 9.896, 9.414,
        8.264, 5.212, -0.557, -8.325, -15.813, -20.821, -22.548, -21.400,
        -18.278, -13.981, -9.105, -4.600, -1.927, -2.057, -4.416, -7.220,
        -8.802, -8.440, -6.364, -3.485, -0.923, 0.651, 1.433, 2.282,
        3.987, 6.502, 8.938, 10.424, 10.873,
    ],
    // 0
    [
        9.637, 9.502, 9.358, 9.366, 9.321, 9.075, 8.661, 7.960,
        6.368, 2.958, -2.758, -9.877, -16.160, -19.636, -19.747, -17.146,
        -13.101, -8.773, -4.753, -1.340, 0.956, 1.519, 0.278, -1.914,
        -3.730, -4.232, -3.339, -1.728, -0.343, 0.263, 0.343, 0.782,
        2.345, 4.914, 7.512, 9.154, 9.637,
    ],
    // 10
    [
        8.802, 9.016, 9.006, 9.047, 9.100, 9.016, 8.599, 7.519,
        5.255, 1.273, -4.459, -10.829, -15.827, -17.913, -16.860, -13.529,
        -9.295, -5.329, -2.102, 0.410, 2.171, 2.869, 2.264, 0.678,
        -0.980, -1.831, -1.660, -0.984, -0.568, -0.794, -1.294, -1.169,
        0.273, 2.883, 5.729, 7.821, 8.802,
    ],
    // 20
    [
        7.790, 8.892, 9.500, 9.897, 10.181, 10.211, 9.617, 7.915,
        4.703, -0.105, -5.972, -11.573, -15.305, -16.230, -14.468, -10.929,
        -6.848, -3.228, -0.468, 1.531, 2.911, 3.565, 3.284, 2.176,
        0.835, -0.070, -0.371, -0.503, -1.047, -2.160, -3.315, -3.608,
        -2.429, 0.083, 3.151, 5.886, 7.790,
    ],
    // 30
    [
        6.313, 8.594, 10.220, 11.365, 12.128, 12.331, 11.485, 9.016,
        4.643, -1.245, -7.470, -12.490, -15.172, -15.214, -13.048, -9.537,
        -5.669, -2.236, 0.408, 2.308, 3.616, 4.334, 4.348, 3.713,
        2.784, 1.944, 1.204, 0.187, -1.472, -3.651, -5.623, -6.465,
        -5.649, -3.304, -0.052, 3.346, 6.313,
    ],
    // 40
    [
        4.643, 7.990, 10.697, 12.788, 14.245, 14.781, 13.795, 10.600,
        4.955, -2.296, -9.244, -14.083, -16.100, -15.549, -13.123, -9.636,
        -5.853, -2.363, 0.532, 2.794, 4.496, 5.657, 6.228, 6.220,
        5.758, 4.923, 3.567, 1.391, -1.695, -5.207, -8.144, -9.538,
        -8.977, -6.664, -3.177, 0.792, 4.643,
    ],
    // 50
    [
        3.219, 7.384, 11.016, 14.015, 16.213, 17.195, 16.217, 12.373,
        5.272, -3.817, -12.024, -17.135, -18.840, -17.881, -15.177, -11.517,
        -7.517, -3.607, -0.033, 3.107, 5.782, 7.944, 9.507, 10.369,
        10.414, 9.454, 7.199, 3.436, -1.575, -6.798, -10.803, -12.605,
        -12.042, -9.529, -5.717, -1.278, 3.219,
    ],
    // 60
    [
        2.165, 7.024, 11.466, 15.286, 18.184, 19.604, 18.596, 13.847,
        4.547, -7.424, -17.512, -23.012, -24.316, -22.758, -19.458, -15.191,
        -10.472, -5.635, -0.894, 3.613, 7.766, 11.429, 14.420, 16.491,
        17.301, 16.373, 13.142, 7.292, -0.483, -8.122, -13.427, -15.532,
        -14.772, -11.915, -7.732, -2.872, 2.165,
    ],
    // 70
    [
        1.346, 6.830, 11.991, 16.522, 19.974, 21.566, 19.890, 12.718,
        -1.418, -18.023, -29.211, -33.499, -33.131, -30.052, -25.418, -19.901,
        -13.905, -7.691, -1.445, 4.684, 10.551, 15.991, 20.790, 24.639,
        27.062, 27.300, 24.206, 16.567, 4.817, -7.087, -14.869, -17.764,
        -17.004, -13.905, -9.415, -4.180, 1.346,
    ],
    // 80
    [
        0.639, 6.092, 11.170, 15.315, 17.589, 16.150, 7.351, -12.538,
        -35.045, -47.069, -50.004, -48.100, -43.673, -37.841, -31.182, -24.025,
        -16.574, -8.970, -1.321, 6.280, 13.742, 20.963, 27.812, 34.100,
        39.528, 43.575, 45.275, 42.783, 33.087, 15.101, -2.836, -12.473,
        -14.977, -13.402, -9.648, -4.759, 0.639,
    ],
    // 90
    [
        179.100, -170.892, -160.884, -150.877, -140.870, -130.865, -120.860, -110.857,
        -100.855, -90.854, -80.854, -70.857, -60.860, -50.864, -40.870, -30.876,
        -20.884, -10.891, -0.899, 9.093, 19.085, 29.078, 39.071, 49.065,
        59.061, 69.057, 79.055, 89.054, 99.055, 109.057, 119.060, 129.065,
        139.070, 149.077, 159.084, 169.092, 179.100,
    ],
];

/// Magnetic inclination in degrees, positive below the horizontal
pub const INCLINATION_TABLE: [[f32; LON_STEPS]; LAT_STEPS] = [
    // -90
    [
        -72.002, -72.001, -72.000, -71.999, -71.998, -71.997, -71.996, -71.995,
        -71.993, -71.992, -71.991, -71.990, -71.989, -71.988, -71.988, -71.987,
        -71.987, -71.987, -71.988, -71.988, -71.989, -71.990, -71.991, -71.992,
        -71.993, -71.995, -71.996, -71.997, -71.998, -71.999, -72.000, -72.001,
        -72.002, -72.002, -72.002, -72.002, -72.002,
    ],
    // -80
    [
        -78.387, -77.592, -76.641, -75.574, -74.429, -73.239, -72.035, -70.852,
        -69.725, -68.686, -67.762, -66.975, -66.333, -65.838, -65.484, -65.263,
        -65.170, -65.207, -65.385, -65.716, -66.217, -66.896, -67.754, -68.778,
        -69.946, -71.223, -72.569, -73.933, -75.263, -76.502, -77.587, -78.456,
        -79.054, -79.341, -79.309, -78.976, -78.387,
    ],
    // -70
    [
        -80.968, -79.150, -77.325, -75.466, -73.548, -71.556, -69.502, -67.439,
        -65.458, -63.674, -62.208, -61.143, -60.497, -60.214, -60.178, -60.253,
        -60.340, -60.410, -60.517, -60.775, -61.319, -62.257, -63.638, -65.446,
        -67.612, -70.042, -72.639, -75.315, -77.989, -80.585, -82.995, -85.010,
        -86.144, -85.841, -84.493, -82.775, -80.968,
    ],
    // -60
    [
        -77.534, -75.552, -73.646, -71.745, -69.764, -67.616, -65.237, -62.648,
        -59.992, -57.550, -55.672, -54.660, -54.621, -55.395, -56.598, -57.783,
        -58.601, -58.914, -58.822, -58.623, -58.714, -59.449, -60.999, -63.318,
        -66.217, -69.464, -72.862, -76.269, -79.592, -82.750, -85.578, -87.338,
        -86.449, -84.236, -81.887, -79.639, -77.534,
    ],
    // -50
    [
        -71.644, -69.713, -67.820, -65.948, -64.058, -62.052, -59.763, -57.052,
        -53.991, -50.994, -48.758, -47.995, -49.016, -51.487, -54.613, -57.561,
        -59.746, -60.885, -60.972, -60.299, -59.495, -59.356, -60.416, -62.685,
        -65.792, -69.270, -72.717, -75.829, -78.354, -80.052, -80.725, -80.366,
        -79.200, -77.533, -75.615, -73.621, -71.644,
    ],
    // -40
    [
        -64.458, -62.500, -60.489, -58.450, -56.465, -54.551, -52.514, -50.007,
        -46.875, -43.541, -41.084, -40.770, -43.178, -47.654, -52.869, -57.713,
        -61.603, -64.242, -65.374, -64.895, -63.253, -61.632, -61.279, -62.590,
        -65.103, -68.048, -70.724, -72.630, -73.550, -73.593, -73.071, -72.238,
        -71.168, -69.823, -68.196, -66.372, -64.458,
    ],
    // -30
    [
        -55.037, -52.964, -50.805, -48.522, -46.261, -44.213, -42.270, -39.935,
        -36.789, -33.198, -30.610, -30.929, -35.004, -41.713, -49.057, -55.656,
        -61.022, -65.007, -67.298, -67.483, -65.647, -62.851, -60.778, -60.482,
        -61.735, -63.612, -65.181, -65.856, -65.552, -64.623, -63.555, -62.617,
        -61.724, -60.583, -59.009, -57.088, -55.037,
    ],
    // -20
    [
        -42.147, -39.794, -37.496, -35.032, -32.476, -30.121, -27.973, -25.487,
        -22.101, -18.194, -15.570, -16.667, -22.538, -31.623, -41.190, -49.397,
        -55.698, -60.131, -62.611, -62.845, -60.877, -57.568, -54.466, -52.911,
        -53.060, -54.077, -54.933, -54.954, -54.057, -52.690, -51.460, -50.657,
        -50.011, -48.941, -47.099, -44.673, -42.147,
    ],
    // -10
    [
        -25.153, -22.325, -19.864, -17.363, -14.712, -12.146, -9.704, -6.911,
        -3.302, 0.600, 2.855, 0.958, -6.192, -17.011, -28.336, -37.704,
        -44.293, -48.327, -50.156, -49.856, -47.539, -43.881, -40.261, -38.078,
        -37.725, -38.472, -39.202, -39.116, -38.103, -36.709, -35.680, -35.300,
        -35.054, -34.020, -31.702, -28.463, -25.153,
    ],
    // 0
    [
        -5.063, -1.807, 0.755, 3.087, 5.466, 7.863, 10.316, 13.131,
        16.467, 19.677, 21.085, 18.665, 11.464, 0.670, -10.829, -20.241,
        -26.365, -29.501, -30.394, -29.459, -26.850, -23.041, -19.204, -16.726,
        -16.173, -16.927, -17.803, -17.895, -17.093, -16.047, -15.592, -15.936,
        -16.305, -15.491, -12.894, -9.031, -5.063,
    ],
    // 10
    [
        14.807, 18.036, 20.506, 22.543, 24.467, 26.453, 28.639, 31.130,
        33.784, 35.947, 36.416, 33.865, 27.711, 18.784, 9.210, 1.373,
        -3.429, -5.383, -5.352, -3.959, -1.419, 1.963, 5.354, 7.651,
        8.287, 7.676, 6.841, 6.606, 7.028, 7.451, 7.131, 6.002,
        4.943, 5.194, 7.367, 10.958, 14.807,
    ],
    // 20
    [
        31.092, 33.799, 36.028, 37.870, 39.557, 41.328, 43.329, 45.503,
        47.516, 48.773, 48.513, 46.085, 41.358, 35.000, 28.395, 23.109,
        20.084, 19.232, 19.845, 21.307, 23.359, 25.811, 28.199, 29.862,
        30.415, 30.098, 29.584, 29.397, 29.490, 29.328, 28.401, 26.771,
        25.200, 24.689, 25.777, 28.180, 31.092,
    ],
    // 30
    [
        43.248, 45.224, 47.146, 48.931, 50.678, 52.549, 54.605, 56.664,
        58.302, 58.988, 58.300, 56.101, 52.625, 48.453, 44.414, 41.350,
        39.749, 39.543, 40.277, 41.500, 42.968, 44.543, 46.001, 47.030,
        47.459, 47.438, 47.315, 47.299, 47.241, 46.734, 45.483, 43.627,
        41.745, 40.552, 40.488, 41.517, 43.248,
    ],
    // 40
    [
        52.970, 54.266, 55.830, 57.538, 59.386, 61.421, 63.592, 65.640,
        67.109, 67.527, 66.683, 64.753, 62.165, 59.418, 56.988, 55.261,
        54.422, 54.406, 54.961, 55.818, 56.795, 57.783, 58.679, 59.375,
        59.836, 60.144, 60.414, 60.630, 60.565, 59.908, 58.515, 56.574,
        54.545, 52.942, 52.119, 52.173, 52.970,
    ],
    // 50
    [
        61.930, 62.722, 63.920, 65.425, 67.194, 69.188, 71.293, 73.229,
        74.561, 74.860, 74.022, 72.359, 70.345, 68.387, 66.761, 65.629,
        65.038, 64.933, 65.188, 65.669, 66.271, 66.932, 67.612, 68.289,
        68.965, 69.647, 70.295, 70.751, 70.752, 70.063, 68.660, 66.785,
        64.829, 63.173, 62.085, 61.680, 61.930,
    ],
    // 60
    [
        70.646, 71.107, 71.965, 73.159, 74.636, 76.329, 78.107, 79.725,
        80.800, 80.948, 80.129, 78.698, 77.075, 75.554, 74.297, 73.376,
        72.800, 72.535, 72.531, 72.735, 73.106, 73.623, 74.278, 75.067,
        75.977, 76.958, 77.889, 78.547, 78.658, 78.051, 76.803, 75.196,
        73.554, 72.146, 71.148, 70.646, 70.646,
    ],
    // 70
    [
        78.811, 79.055, 79.597, 80.405, 81.435, 82.623, 83.859, 84.945,
        85.551, 85.378, 84.515, 83.318, 82.065, 80.913, 79.941, 79.183,
        78.648, 78.329, 78.215, 78.291, 78.551, 78.990, 79.608, 80.396,
        81.333, 82.364, 83.378, 84.174, 84.483, 84.143, 83.270, 82.141,
        81.003, 80.021, 79.299, 78.890, 78.811,
    ],
    // 80
    [
        85.943, 86.036, 86.278, 86.655, 87.139, 87.682, 88.184, 88.443,
        88.245, 87.676, 86.948, 86.188, 85.458, 84.798, 84.232, 83.775,
        83.437, 83.223, 83.137, 83.178, 83.347, 83.639, 84.052, 84.577,
        85.199, 85.895, 86.629, 87.338, 87.908, 88.158, 87.991, 87.554,
        87.045, 86.582, 86.226, 86.008, 85.943,
    ],
    // 90
    [
        88.161, 88.161, 88.161, 88.160, 88.160, 88.159, 88.159, 88.158,
        88.157, 88.156, 88.155, 88.154, 88.153, 88.152, 88.152, 88.151,
        88.151, 88.151, 88.150, 88.151, 88.151, 88.151, 88.152, 88.152,
        88.153, 88.154, 88.155, 88.156, 88.157, 88.158, 88.158, 88.159,
        88.160, 88.160, 88.161, 88.161, 88.161,
    ],
];

/// Total field intensity in Gauss
pub const INTENSITY_TABLE: [[f32; LON_STEPS]; LAT_STEPS] = [
    // -90
    [
        0.54853, 0.54853, 0.54852, 0.54851, 0.54850, 0.54849, 0.54847, 0.54846,
        0.54844, 0.54843, 0.54842, 0.54841, 0.54840, 0.54839, 0.54838, 0.54838,
        0.54838, 0.54838, 0.54838, 0.54839, 0.54840, 0.54841, 0.54842, 0.54843,
        0.54844, 0.54846, 0.54847, 0.54849, 0.54850, 0.54851, 0.54852, 0.54853,
        0.54853, 0.54854, 0.54854, 0.54854, 0.54853,
    ],
    // -80
    [
        0.60864, 0.60232, 0.59443, 0.58519, 0.57478, 0.56342, 0.55136, 0.53886,
        0.52625, 0.51388, 0.50209, 0.49124, 0.48165, 0.47359, 0.46729, 0.46297,
        0.46079, 0.46092, 0.46346, 0.46847, 0.47592, 0.48565, 0.49741, 0.51079,
        0.52529, 0.54032, 0.55526, 0.56952, 0.58252, 0.59380, 0.60298, 0.60983,
        0.61422, 0.61617, 0.61578, 0.61320, 0.60864,
    ],
    // -70
    [
        0.63129, 0.61848, 0.60397, 0.58789, 0.57025, 0.55102, 0.53032, 0.50846,
        0.48605, 0.46392, 0.44301, 0.42413, 0.40789, 0.39457, 0.38423, 0.37687,
        0.37258, 0.37170, 0.37482, 0.38259, 0.39550, 0.41365, 0.43663, 0.46349,
        0.49292, 0.52338, 0.55331, 0.58123, 0.60582, 0.62604, 0.64119, 0.65092,
        0.65533, 0.65483, 0.65014, 0.64203, 0.63129,
    ],
    // -60
    [
        0.61899, 0.60058, 0.58138, 0.56131, 0.53992, 0.51661, 0.49094, 0.46301,
        0.43366, 0.40446, 0.37738, 0.35421, 0.33591, 0.32242, 0.31283, 0.30602,
        0.30137, 0.29925, 0.30110, 0.30893, 0.32461, 0.34901, 0.38154, 0.42031,
        0.46269, 0.50589, 0.54736, 0.58495, 0.61690, 0.64182, 0.65880, 0.66754,
        0.66840, 0.66244, 0.65115, 0.63618, 0.61899,
    ],
    // -50
    [
        0.58475, 0.56235, 0.54001, 0.51762, 0.49466, 0.47019, 0.44317, 0.41302,
        0.38035, 0.34732, 0.31718, 0.29308, 0.27667, 0.26730, 0.26249, 0.25945,
        0.25651, 0.25388, 0.25364, 0.25934, 0.27483, 0.30242, 0.34156, 0.38908,
        0.44054, 0.49159, 0.53883, 0.57989, 0.61321, 0.63772, 0.65274, 0.65820,
        0.65471, 0.64363, 0.62691, 0.60667, 0.58475,
    ],
    // -40
    [
        0.54008, 0.51587, 0.49170, 0.46777, 0.44415, 0.42035, 0.39508, 0.36686,
        0.33540, 0.30276, 0.27310, 0.25092, 0.23863, 0.23506, 0.23632, 0.23847,
        0.23939, 0.23895, 0.23870, 0.24204, 0.25413, 0.27977, 0.31994, 0.37089,
        0.42627, 0.47982, 0.52704, 0.56547, 0.59425, 0.61341, 0.62335, 0.62467,
        0.61808, 0.60465, 0.58593, 0.56381, 0.54008,
    ],
    // -30
    [
        0.48884, 0.46527, 0.44138, 0.41753, 0.39451, 0.37281, 0.35148, 0.32842,
        0.30226, 0.27435, 0.24886, 0.23079, 0.22305, 0.22450, 0.23096, 0.23851,
        0.24524, 0.25055, 0.25414, 0.25714, 0.26405, 0.28198, 0.31553, 0.36248,
        0.41550, 0.46642, 0.50919, 0.54086, 0.56119, 0.57179, 0.57486, 0.57206,
        0.56406, 0.55091, 0.53303, 0.51178, 0.48884,
    ],
    // -20
    [
        0.43251, 0.41198, 0.39132, 0.37058, 0.35079, 0.33308, 0.31710, 0.30081,
        0.28235, 0.26220, 0.24343, 0.23007, 0.22514, 0.22888, 0.23851, 0.25064,
        0.26330, 0.27508, 0.28389, 0.28839, 0.29124, 0.29985, 0.32177, 0.35804,
        0.40241, 0.44597, 0.48138, 0.50479, 0.51612, 0.51819, 0.51485, 0.50879,
        0.50034, 0.48836, 0.47220, 0.45295, 0.43251,
    ],
    // -10
    [
        0.37875, 0.36331, 0.34848, 0.33392, 0.32032, 0.30879, 0.29932, 0.29045,
        0.28045, 0.26893, 0.25703, 0.24682, 0.24120, 0.24282, 0.25172, 0.26532,
        0.28085, 0.29597, 0.30782, 0.31399, 0.31550, 0.31825, 0.32985, 0.35355,
        0.38564, 0.41853, 0.44506, 0.46093, 0.46570, 0.46232, 0.45506, 0.44682,
        0.43778, 0.42636, 0.41175, 0.39520, 0.37875,
    ],
    // 0
    [
        0.34101, 0.33190, 0.32411, 0.31714, 0.31132, 0.30738, 0.30537, 0.30414,
        0.30195, 0.29742, 0.29004, 0.28040, 0.27116, 0.26669, 0.26989, 0.27984,
        0.29340, 0.30751, 0.31936, 0.32673, 0.32978, 0.33224, 0.33947, 0.35435,
        0.37510, 0.39693, 0.41472, 0.42491, 0.42657, 0.42136, 0.41230, 0.40184,
        0.39073, 0.37848, 0.36515, 0.35217, 0.34101,
    ],
    // 10
    [
        0.32810, 0.32483, 0.32369, 0.32403, 0.32596, 0.32992, 0.33573, 0.34182,
        0.34570, 0.34510, 0.33896, 0.32788, 0.31458, 0.30359, 0.29909, 0.30211,
        0.31060, 0.32158, 0.33237, 0.34109, 0.34751, 0.35350, 0.36166, 0.37314,
        0.38688, 0.40065, 0.41208, 0.41904, 0.41997, 0.41446, 0.40348, 0.38907,
        0.37339, 0.35813, 0.34473, 0.33454, 0.32810,
    ],
    // 20
    [
        0.33918, 0.33955, 0.34346, 0.34996, 0.35889, 0.37036, 0.38361, 0.39608,
        0.40420, 0.40511, 0.39811, 0.38481, 0.36853, 0.35353, 0.34371, 0.34101,
        0.34485, 0.35304, 0.36302, 0.37287, 0.38202, 0.39118, 0.40122, 0.41216,
        0.42335, 0.43408, 0.44359, 0.45034, 0.45186, 0.44594, 0.43214, 0.41249,
        0.39060, 0.37019, 0.35406, 0.34369, 0.33918,
    ],
    // 30
    [
        0.37155, 0.37314, 0.37984, 0.39048, 0.40459, 0.42178, 0.44045, 0.45718,
        0.46772, 0.46908, 0.46101, 0.44602, 0.42809, 0.41136, 0.39911, 0.39316,
        0.39352, 0.39878, 0.40688, 0.41608, 0.42569, 0.43584, 0.44675, 0.45834,
        0.47035, 0.48256, 0.49425, 0.50330, 0.50637, 0.50039, 0.48453, 0.46097,
        0.43415, 0.40892, 0.38906, 0.37652, 0.37155,
    ],
    // 40
    [
        0.42282, 0.42415, 0.43131, 0.44318, 0.45906, 0.47800, 0.49787, 0.51509,
        0.52562, 0.52680, 0.51857, 0.50349, 0.48546, 0.46830, 0.45481, 0.44644,
        0.44335, 0.44474, 0.44935, 0.45612, 0.46454, 0.47458, 0.48632, 0.49972,
        0.51458, 0.53033, 0.54547, 0.55720, 0.56195, 0.55685, 0.54129, 0.51753,
        0.48996, 0.46356, 0.44235, 0.42861, 0.42282,
    ],
    // 50
    [
        0.48408, 0.48456, 0.49034, 0.50047, 0.51410, 0.52999, 0.54610, 0.55951,
        0.56725, 0.56739, 0.55988, 0.54655, 0.53034, 0.51424, 0.50053, 0.49048,
        0.48447, 0.48230, 0.48352, 0.48774, 0.49480, 0.50466, 0.51729, 0.53243,
        0.54951, 0.56733, 0.58386, 0.59634, 0.60188, 0.59849, 0.58601, 0.56643,
        0.54333, 0.52080, 0.50227, 0.48983, 0.48408,
    ],
    // 60
    [
        0.53885, 0.53834, 0.54159, 0.54788, 0.55640, 0.56603, 0.57528, 0.58241,
        0.58573, 0.58421, 0.57782, 0.56751, 0.55496, 0.54199, 0.53017, 0.52060,
        0.51390, 0.51032, 0.50995, 0.51281, 0.51889, 0.52810, 0.54020, 0.55466,
        0.57056, 0.58654, 0.60083, 0.61145, 0.61665, 0.61543, 0.60795, 0.59557,
        0.58057, 0.56553, 0.55271, 0.54361, 0.53885,
    ],
    // 70
    [
        0.57187, 0.57066, 0.57123, 0.57324, 0.57615, 0.57932, 0.58201, 0.58345,
        0.58303, 0.58036, 0.57548, 0.56876, 0.56091, 0.55273, 0.54507, 0.53863,
        0.53394, 0.53139, 0.53121, 0.53351, 0.53825, 0.54528, 0.55424, 0.56460,
        0.57559, 0.58629, 0.59568, 0.60280, 0.60690, 0.60764, 0.60517, 0.60014,
        0.59353, 0.58649, 0.58006, 0.57504, 0.57187,
    ],
    // 80
    [
        0.57894, 0.57784, 0.57702, 0.57642, 0.57590, 0.57532, 0.57451, 0.57331,
        0.57164, 0.56944, 0.56676, 0.56371, 0.56048, 0.55731, 0.55443, 0.55210,
        0.55053, 0.54987, 0.55023, 0.55164, 0.55406, 0.55738, 0.56141, 0.56590,
        0.57055, 0.57505, 0.57909, 0.58240, 0.58479, 0.58618, 0.58660, 0.58615,
        0.58506, 0.58357, 0.58192, 0.58033, 0.57894,
    ],
    // 90
    [
        0.56799, 0.56799, 0.56798, 0.56798, 0.56798, 0.56798, 0.56797, 0.56797,
        0.56797, 0.56797, 0.56796, 0.56796, 0.56796, 0.56796, 0.56796, 0.56795,
        0.56795, 0.56796, 0.56796, 0.56796, 0.56796, 0.56796, 0.56796, 0.56797,
        0.56797, 0.56797, 0.56798, 0.56798, 0.56798, 0.56798, 0.56799, 0.56799,
        0.56799, 0.56799, 0.56799, 0.56799, 0.56799,
    ],
];
